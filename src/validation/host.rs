use crate::models::Host;
use crate::utils::{accept, Rejection};

const LOCALHOST: &str = "localhost";

/// Host syntax as accepted in URLs: `localhost`, a dotted quad, or a
/// multi-label domain name.
pub struct HostValidator;

impl HostValidator {
    pub fn is_valid_host(host: &str) -> bool {
        accept("Host", Self::parse(host))
    }

    pub fn parse(host: &str) -> Result<Host, Rejection> {
        if host.is_empty() {
            return Err(Rejection::MissingHost);
        }
        if host == LOCALHOST {
            return Ok(Host::Localhost);
        }

        let labels: Vec<&str> = host.split('.').collect();
        if labels.len() == 4 {
            return Self::parse_ipv4(&labels);
        }
        Self::parse_domain(&labels)
    }

    fn parse_ipv4(segments: &[&str]) -> Result<Host, Rejection> {
        let mut octets = [0u8; 4];
        for (octet, segment) in octets.iter_mut().zip(segments) {
            if segment.is_empty() {
                return Err(Rejection::Host("empty address segment"));
            }
            if !segment.bytes().all(|b| b.is_ascii_digit()) {
                return Err(Rejection::Host("address segment is not numeric"));
            }
            *octet = segment
                .parse::<u8>()
                .map_err(|_| Rejection::Host("address segment is not in 0..=255"))?;
        }
        Ok(Host::Ipv4(octets))
    }

    fn parse_domain(labels: &[&str]) -> Result<Host, Rejection> {
        if labels.len() < 2 {
            return Err(Rejection::Host("domain needs at least two labels"));
        }
        for label in labels {
            if label.is_empty() {
                return Err(Rejection::Host("empty label"));
            }
            if label.starts_with('-') || label.ends_with('-') {
                return Err(Rejection::Host("label starts or ends with '-'"));
            }
            if !label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
                return Err(Rejection::Host("label has characters other than letters, digits and '-'"));
            }
        }
        Ok(Host::Domain(labels.iter().map(|l| l.to_string()).collect()))
    }
}
