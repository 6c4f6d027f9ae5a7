//! Account checks that run before anything touches the database.

use thiserror::Error;

pub const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Username tidak boleh kosong")]
    EmptyUsername,
    #[error("Username tidak boleh mengandung spasi")]
    UsernameContainsSpace,
    #[error("Username hanya boleh mengandung huruf")]
    UsernameNotLetters,
    #[error("Password tidak boleh kosong")]
    EmptyPassword,
    #[error("Password minimal 6 karakter")]
    PasswordTooShort,
    #[error("Password tidak cocok")]
    PasswordMismatch,
}

/// Trims and lowercases, the form usernames are stored and looked up in.
#[must_use]
pub fn normalize_username(username: &str) -> String {
    username.trim().to_lowercase()
}

pub fn validate_username(username: &str) -> Result<(), ValidationError> {
    if username.is_empty() {
        return Err(ValidationError::EmptyUsername);
    }
    if username.contains(' ') {
        return Err(ValidationError::UsernameContainsSpace);
    }
    if !username.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(ValidationError::UsernameNotLetters);
    }
    Ok(())
}

pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    if password.is_empty() {
        return Err(ValidationError::EmptyPassword);
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::PasswordTooShort);
    }
    Ok(())
}

/// Validates a registration form and returns the normalized username.
pub fn validate_registration(username: &str, password: &str, confirm_password: &str) -> Result<String, ValidationError> {
    validate_username(username)?;
    validate_password(password)?;
    if password != confirm_password {
        return Err(ValidationError::PasswordMismatch);
    }
    Ok(normalize_username(username))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_username_rules() {
        assert_eq!(validate_username(""), Err(ValidationError::EmptyUsername));
        assert_eq!(validate_username("bud i"), Err(ValidationError::UsernameContainsSpace));
        assert_eq!(validate_username("budi1"), Err(ValidationError::UsernameNotLetters));
        assert_eq!(validate_username("budi_s"), Err(ValidationError::UsernameNotLetters));
        assert_eq!(validate_username("sári"), Err(ValidationError::UsernameNotLetters));
        assert_eq!(validate_username("Budi"), Ok(()));
    }

    #[test]
    fn test_password_rules() {
        assert_eq!(validate_password(""), Err(ValidationError::EmptyPassword));
        assert_eq!(validate_password("12345"), Err(ValidationError::PasswordTooShort));
        assert_eq!(validate_password("123456"), Ok(()));
    }

    #[test]
    fn test_registration() {
        assert_eq!(
            validate_registration("bud i", "rahasia", "rahasia"),
            Err(ValidationError::UsernameContainsSpace)
        );
        assert_eq!(
            validate_registration("budi", "rahasia", "rahasib"),
            Err(ValidationError::PasswordMismatch)
        );
        assert_eq!(validate_registration("Budi", "rahasia", "rahasia"), Ok("budi".to_owned()));
        assert_eq!(
            validate_registration(" budi", "rahasia", "rahasia"),
            Err(ValidationError::UsernameContainsSpace)
        );
    }

    #[test]
    fn test_messages() {
        assert_eq!(ValidationError::PasswordTooShort.to_string(), "Password minimal 6 karakter");
        assert_eq!(ValidationError::PasswordMismatch.to_string(), "Password tidak cocok");
    }
}
