use crate::models::Host;
use crate::utils::{accept, check_printable, Rejection};
use crate::validation::HostValidator;

const SCHEMES: [&str; 3] = ["http", "https", "ftp"];

pub struct UrlValidator;

impl UrlValidator {
    pub fn validate(url: &str) -> bool {
        accept("URL", Self::check(url))
    }

    /// Checks the URL structure and returns its host and optional port.
    pub(crate) fn check(url: &str) -> Result<(Host, Option<u16>), Rejection> {
        if url.contains(' ') {
            return Err(Rejection::ContainsSpace);
        }

        let parts: Vec<&str> = url.split("://").collect();
        let (scheme, rest) = match parts.as_slice() {
            [scheme, rest] => (*scheme, *rest),
            _ => return Err(Rejection::UrlStructure(parts.len())),
        };
        if !SCHEMES.contains(&scheme) {
            return Err(Rejection::Scheme(scheme.to_string()));
        }

        let host_port = match rest.find('/') {
            Some(slash) => &rest[..slash],
            None => rest,
        };
        if host_port.is_empty() {
            return Err(Rejection::MissingHost);
        }

        let (host, port) = match host_port.split_once(':') {
            Some((host, port)) => (host, Some(Self::port(port)?)),
            None => (host_port, None),
        };
        let host = HostValidator::parse(host)?;

        check_printable(url)?;
        Ok((host, port))
    }

    fn port(port: &str) -> Result<u16, Rejection> {
        let invalid = || Rejection::Port(port.to_string());
        if port.is_empty() || !port.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        match port.parse::<u16>() {
            Ok(0) | Err(_) => Err(invalid()),
            Ok(p) => Ok(p),
        }
    }
}
