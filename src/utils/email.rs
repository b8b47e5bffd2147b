use crate::error::{AppError, AppResult};
use regex::Regex;

const EMAIL_PATTERN: &str = r"^[A-Za-z0-9._%+\-]+@[A-Za-z0-9\-]+(\.[A-Za-z0-9\-]+)*\.[A-Za-z]{2,}$";

/// 验证邮箱格式
pub fn validate_email(email: &str) -> AppResult<()> {
    let email_regex = Regex::new(EMAIL_PATTERN)
        .map_err(|e| AppError::InternalError(format!("Invalid email pattern: {e}")))?;

    if email.len() > 255 || !email_regex.is_match(email) {
        return Err(AppError::ValidationError(
            "Invalid email address".to_string(),
        ));
    }

    Ok(())
}

/// 去除首尾空白并转小写，作为唯一键存储
pub fn normalize_email(email: &str) -> String {
    email.trim().to_ascii_lowercase()
}

/// 用户名 2-32 个字符
pub fn validate_username(username: &str) -> AppResult<()> {
    let len = username.trim().chars().count();
    if !(2..=32).contains(&len) {
        return Err(AppError::ValidationError(
            "Username must be between 2 and 32 characters".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_email() {
        assert!(validate_email("player@example.com").is_ok());
        assert!(validate_email("first.last+tag@mail.example.org").is_ok());
        assert!(validate_email("player@example").is_err());
        assert!(validate_email("player.example.com").is_err());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("").is_err());
    }

    #[test]
    fn test_normalize_email() {
        assert_eq!(normalize_email("  Player@Example.COM "), "player@example.com");
    }

    #[test]
    fn test_validate_username() {
        assert!(validate_username("ab").is_ok());
        assert!(validate_username("a").is_err());
        assert!(validate_username("  a  ").is_err());
        assert!(validate_username(&"x".repeat(33)).is_err());
        assert!(validate_username("Счастливчик").is_ok());
    }
}
