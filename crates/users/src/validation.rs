//! Input validation helpers.

use regex::Regex;

/// Validate email format
pub fn validate_email(email: &str) -> Result<(), String> {
    let email_regex = Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .map_err(|_| "Invalid email regex".to_string())?;

    if !email_regex.is_match(email) {
        return Err("Invalid email format".to_string());
    }

    if email.len() > 255 {
        return Err("Email too long (max 255 characters)".to_string());
    }

    Ok(())
}

/// Validate display name
pub fn validate_name(name: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("Name cannot be empty".to_string());
    }

    if name.len() > 100 {
        return Err("Name too long (max 100 characters)".to_string());
    }

    Ok(())
}

/// Validate avatar URL
pub fn validate_avatar_url(avatar_url: &str) -> Result<(), String> {
    if avatar_url.trim().is_empty() {
        return Err("Avatar URL cannot be empty".to_string());
    }

    if !avatar_url.starts_with("http://") && !avatar_url.starts_with("https://") {
        return Err("Avatar URL must be a valid HTTP/HTTPS URL".to_string());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_addresses() {
        assert!(validate_email("alice@example.com").is_ok());
        assert!(validate_email("a.b+tag@sub.domain.org").is_ok());
    }

    #[test]
    fn rejects_malformed_addresses() {
        assert!(validate_email("").is_err());
        assert!(validate_email("not-an-email").is_err());
        assert!(validate_email("missing@tld").is_err());
        assert!(validate_email(&format!("{}@example.com", "a".repeat(260))).is_err());
    }

    #[test]
    fn name_must_be_present_and_bounded() {
        assert!(validate_name("Alice").is_ok());
        assert!(validate_name("   ").is_err());
        assert!(validate_name(&"x".repeat(101)).is_err());
    }

    #[test]
    fn avatar_must_be_http_url() {
        assert!(validate_avatar_url("https://example.com/a.png").is_ok());
        assert!(validate_avatar_url("http://example.com/a.png").is_ok());
        assert!(validate_avatar_url("ftp://example.com/a.png").is_err());
        assert!(validate_avatar_url("").is_err());
    }
}
