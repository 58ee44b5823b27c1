use thiserror::Error;

/// Reason a single input was refused by one of the validators.
///
/// Never leaves the crate through a predicate: the public functions collapse
/// it into `false` after logging it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("input is empty")]
    Empty,
    #[error("input contains a space")]
    ContainsSpace,
    #[error("character {0:?} is outside printable ASCII")]
    NonPrintable(char),
    #[error("expected exactly one '@', found {0} parts")]
    AtSign(usize),
    #[error("local part: {0}")]
    LocalPart(&'static str),
    #[error("domain: {0}")]
    Domain(&'static str),
    #[error("top-level domain '{0}' is shorter than 2 characters")]
    TopLevelDomain(String),
    #[error("expected {expected} digits, found {found}")]
    DigitCount { expected: usize, found: usize },
    #[error("all digits are identical")]
    RepeatedDigits,
    #[error("check digit {position} mismatch: expected {expected}, found {found}")]
    CheckDigit {
        position: usize,
        expected: u32,
        found: u32,
    },
    #[error("expected 3 date components, found {0}")]
    DateComponents(usize),
    #[error("date component '{0}' is not a non-zero integer")]
    DateComponent(String),
    #[error("{year:04}-{month:02}-{day:02} is not a calendar date")]
    CalendarOverflow { year: u32, month: u32, day: u32 },
    #[error("age {age} is below the minimum of {min_age}")]
    BelowMinimumAge { age: i64, min_age: u32 },
    #[error("name needs at least 2 parts, found {0}")]
    NameParts(usize),
    #[error("name part '{0}' is shorter than 2 characters")]
    NamePartTooShort(String),
    #[error("expected '<scheme>://<rest>', found {0} parts")]
    UrlStructure(usize),
    #[error("unsupported scheme '{0}'")]
    Scheme(String),
    #[error("missing host")]
    MissingHost,
    #[error("port '{0}' is not in 1..=65535")]
    Port(String),
    #[error("invalid host: {0}")]
    Host(&'static str),
}

/// Failures at the edges of the crate: loading records and rules, or
/// interpreting user-supplied option strings.
#[derive(Debug, Error)]
pub enum CadastroError {
    #[error("Unknown date format: {0}")]
    UnknownDateFormat(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Record parsing error: {0}")]
    Json(#[from] serde_json::Error),
}
