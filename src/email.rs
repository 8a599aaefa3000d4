use lazy_static::lazy_static;
use regex::Regex;

use crate::observability::record_validation;
use crate::validation::Validator;

pub const MAX_LOCAL_PART_LENGTH: usize = 64;
pub const MAX_DOMAIN_LENGTH: usize = 253;

lazy_static! {
    static ref EMAIL_REGEX: Regex = Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .expect("email regex compiles");
}

/// Validates an e-mail address and splits it into its local part and domain.
fn split_valid(email: &str) -> Option<(&str, &str)> {
    if !EMAIL_REGEX.is_match(email) {
        return None;
    }
    let (local_part, domain) = email.split_once('@')?;

    if local_part.len() > MAX_LOCAL_PART_LENGTH || domain.len() > MAX_DOMAIN_LENGTH {
        return None;
    }
    if has_invalid_dots(local_part) || has_invalid_dots(domain) {
        return None;
    }
    Some((local_part, domain))
}

fn has_invalid_dots(part: &str) -> bool {
    part.starts_with('.') || part.ends_with('.') || part.contains("..")
}

pub fn validate_email(email: &str) -> bool {
    let valid = split_valid(email).is_some();
    if !valid {
        tracing::debug!("rejected email address");
    }
    record_validation("email", valid);
    valid
}

/// The domain of a valid address, `None` otherwise.
pub fn extract_domain(email: &str) -> Option<&str> {
    split_valid(email).map(|(_, domain)| domain)
}

/// The local part of a valid address, `None` otherwise.
pub fn extract_local_part(email: &str) -> Option<&str> {
    split_valid(email).map(|(local_part, _)| local_part)
}

/// Whether the address belongs to `domain` or one of its subdomains. Matching is done on
/// whole dot-separated labels and ignores case.
pub fn is_from_domain(email: &str, domain: &str) -> bool {
    if domain.is_empty() {
        return false;
    }
    let Some(email_domain) = extract_domain(email) else {
        return false;
    };

    let email_domain = email_domain.to_lowercase();
    let target_domain = domain.to_lowercase();
    let email_labels: Vec<&str> = email_domain.split('.').collect();
    let target_labels: Vec<&str> = target_domain.split('.').collect();

    if email_labels.len() < target_labels.len() {
        return false;
    }
    email_labels[email_labels.len() - target_labels.len()..] == target_labels[..]
}

pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// [Validator] wrapper around [validate_email]
pub struct EmailChecker;

impl Validator for EmailChecker {
    fn is_valid(&self, input: &str) -> bool {
        validate_email(input)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_valid_emails() {
        let valid_emails = vec![
            "test@example.com",
            "first.last@example.com",
            "user+tag@sub.example.co",
            "a_b%c-d@my-domain.org",
            "UPPER@EXAMPLE.COM",
        ];
        for email in valid_emails {
            assert!(validate_email(email), "{email}");
        }
    }

    #[test]
    fn test_invalid_emails() {
        let local_too_long = format!("{}@example.com", "a".repeat(65));
        let domain_too_long = format!("a@{}.com", "b".repeat(250));
        let invalid_emails = vec![
            "",
            "plainaddress",
            "@example.com",
            "user@",
            "user@example",
            "user@example.c",
            "user@@example.com",
            "user name@example.com",
            ".user@example.com",
            "user.@example.com",
            "us..er@example.com",
            "user@.example.com",
            "user@example..com",
            "usér@example.com",
            " user@example.com",
            local_too_long.as_str(),
            domain_too_long.as_str(),
        ];
        for email in invalid_emails {
            assert!(!validate_email(email), "{email}");
        }

        // Exactly at the limits
        let local_at_limit = format!("{}@example.com", "a".repeat(64));
        assert!(validate_email(&local_at_limit));
        let domain_at_limit = format!("a@{}.com", "b".repeat(MAX_DOMAIN_LENGTH - 4));
        assert!(validate_email(&domain_at_limit));
        let domain_over_limit = format!("a@{}.com", "b".repeat(MAX_DOMAIN_LENGTH - 3));
        assert!(!validate_email(&domain_over_limit));
    }

    #[test]
    fn test_extract() {
        assert_eq!(extract_domain("user@example.com"), Some("example.com"));
        assert_eq!(extract_local_part("user@example.com"), Some("user"));
        assert_eq!(extract_domain("not-an-email"), None);
        assert_eq!(extract_local_part("user@example..com"), None);
    }

    #[test]
    fn test_is_from_domain() {
        assert!(is_from_domain("a@sub.example.com", "example.com"));
        assert!(is_from_domain("a@example.com", "example.com"));
        assert!(is_from_domain("a@Example.COM", "example.com"));
        assert!(is_from_domain("a@example.com", "EXAMPLE.com"));
        assert!(is_from_domain("a@example.com", "com"));

        assert!(!is_from_domain("a@example.com", "sub.example.com"));
        assert!(!is_from_domain("a@notexample.com", "example.com"));
        assert!(!is_from_domain("a@example.com", ""));
        assert!(!is_from_domain("invalid", "example.com"));
        assert!(!is_from_domain("a@example.com", "example.com."));
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize_email("  Test@Example.COM \n"), "test@example.com");
        assert_eq!(normalize_email(""), "");
    }

    #[test]
    fn test_validator() {
        assert!(EmailChecker.is_valid("test@example.com"));
        assert!(!EmailChecker.is_valid("test@example"));
    }
}
