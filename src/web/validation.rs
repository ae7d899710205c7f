//! Pure form validators. Failure reasons are shown to the user verbatim as
//! flash messages.

/// Title must be 1-60 characters; year must be exactly 4 characters.
/// Year content is deliberately not checked for digits.
pub fn validate_movie(title: &str, year: &str) -> Result<(), String> {
    if title.is_empty() || title.chars().count() > 60 {
        return Err("Invalid title: must be 1 to 60 characters.".to_string());
    }

    if year.chars().count() != 4 {
        return Err("Invalid year: must be exactly 4 characters.".to_string());
    }

    Ok(())
}

pub fn validate_username(name: &str) -> Result<(), String> {
    if name.is_empty() || name.chars().count() > 20 {
        return Err("Invalid name: must be 1 to 20 characters.".to_string());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_movie() {
        assert!(validate_movie("Leon", "1994").is_ok());
        assert!(validate_movie(&"a".repeat(60), "1994").is_ok());
        assert!(validate_movie("Amélie", "2001").is_ok());
        assert!(validate_movie("", "1994").is_err());
        assert!(validate_movie(&"a".repeat(61), "1994").is_err());
        assert!(validate_movie("Leon", "").is_err());
        assert!(validate_movie("Leon", "94").is_err());
        assert!(validate_movie("Leon", "19944").is_err());
    }

    #[test]
    fn test_year_is_length_checked_only() {
        // Non-digit four-character years are part of the contract
        assert!(validate_movie("Leon", "20XX").is_ok());
        assert!(validate_movie("Leon", "    ").is_ok());
    }

    #[test]
    fn test_validate_username() {
        assert!(validate_username("Mogu").is_ok());
        assert!(validate_username(&"a".repeat(20)).is_ok());
        assert!(validate_username("").is_err());
        assert!(validate_username(&"a".repeat(21)).is_err());
    }
}
