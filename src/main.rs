// Command-line front end for the cadastro validators

use cadastro::{
    models::{ContactRecord, DateFormat, RecordRules, ValidationIssueType, ValidationResult},
    utils::CadastroError,
    RecordValidator,
};
use clap::{Parser, Subcommand, ValueEnum};
use log::error;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "cadastro", version, about = "Validate personal and contact data")]
struct Cli {
    /// Log rejection reasons (same as RUST_LOG=debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Check a single value
    Check {
        kind: Kind,
        value: String,
        /// Date pattern for `date` and `birth-date`
        #[arg(long, default_value = "YYYY-MM-DD")]
        format: DateFormat,
        /// Minimum age in whole years for `birth-date`
        #[arg(long, default_value_t = 0)]
        min_age: u32,
    },
    /// Validate a JSON contact record
    Record {
        path: PathBuf,
        /// JSON file with record rules
        #[arg(long)]
        rules: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Kind {
    Email,
    Cpf,
    Cnpj,
    Date,
    BirthDate,
    FullName,
    Url,
    Host,
    Cep,
}

fn check(kind: Kind, value: &str, format: DateFormat, min_age: u32) -> bool {
    match kind {
        Kind::Email => cadastro::validate_email(value),
        Kind::Cpf => cadastro::validate_cpf(value),
        Kind::Cnpj => cadastro::validate_cnpj(value),
        Kind::Date => cadastro::validate_date(value, format),
        Kind::BirthDate => cadastro::validate_birth_date(value, min_age, format),
        Kind::FullName => cadastro::validate_full_name(value),
        Kind::Url => cadastro::validate_url(value),
        Kind::Host => cadastro::is_valid_host(value),
        Kind::Cep => cadastro::validate_cep(value),
    }
}

// Print one line per field followed by the issues found
fn print_detailed_report(result: &ValidationResult) {
    println!("\n===============================================");
    println!("      CONTACT RECORD VALIDATION REPORT");
    println!("===============================================\n");

    println!("FIELDS:");
    for field in &result.fields {
        println!(
            "  {:<12} {}",
            field.field.label(),
            match field.valid {
                Some(true) => "PASSED",
                Some(false) => "FAILED",
                None => "-",
            }
        );
    }

    if !result.issues.is_empty() {
        println!("\nISSUES FOUND:");
        for issue in &result.issues {
            println!(
                "  - [{}] {}",
                match issue.issue_type {
                    ValidationIssueType::Missing => "MISSING",
                    ValidationIssueType::Format => "FORMAT",
                    ValidationIssueType::Checksum => "CHECKSUM",
                    ValidationIssueType::Age => "AGE",
                },
                issue.message
            );
        }
    }

    println!(
        "\nRecord validation result: {}",
        if result.is_valid { "VALID" } else { "INVALID" }
    );
}

fn validate_record(path: &Path, rules: Option<&Path>) -> Result<ValidationResult, CadastroError> {
    let rules = match rules {
        Some(rules_path) => RecordRules::from_json_file(rules_path)?,
        None => RecordRules::default(),
    };
    let record = ContactRecord::from_json_file(path)?;
    Ok(RecordValidator::new(rules).validate(&record))
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    match cli.command {
        Command::Check {
            kind,
            value,
            format,
            min_age,
        } => {
            if check(kind, &value, format, min_age) {
                println!("VALID");
                ExitCode::SUCCESS
            } else {
                println!("INVALID");
                ExitCode::from(1)
            }
        }
        Command::Record { path, rules } => match validate_record(&path, rules.as_deref()) {
            Ok(result) => {
                print_detailed_report(&result);
                if result.is_valid {
                    ExitCode::SUCCESS
                } else {
                    ExitCode::from(1)
                }
            }
            Err(err) => {
                error!("Error validating record {:?}: {}", path, err);
                eprintln!("Error validating record: {}", err);
                ExitCode::from(2)
            }
        },
    }
}
