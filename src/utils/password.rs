use crate::error::{AppError, AppResult};
use bcrypt::{DEFAULT_COST, hash, verify};

pub const PASSWORD_MIN_CHARS: usize = 8;
pub const PASSWORD_MAX_CHARS: usize = 128;

/// 注册密码规则：8-128 个字符，须同时包含大写、小写字母和数字
pub fn validate_password(password: &str) -> AppResult<()> {
    let length = password.chars().count();
    if !(PASSWORD_MIN_CHARS..=PASSWORD_MAX_CHARS).contains(&length) {
        return Err(AppError::ValidationError(format!(
            "Password must be between {PASSWORD_MIN_CHARS} and {PASSWORD_MAX_CHARS} characters"
        )));
    }

    let (mut upper, mut lower, mut digit) = (false, false, false);
    for c in password.chars() {
        upper |= c.is_uppercase();
        lower |= c.is_lowercase();
        digit |= c.is_ascii_digit();
    }

    let missing: Vec<&str> = [
        (upper, "an uppercase letter"),
        (lower, "a lowercase letter"),
        (digit, "a digit"),
    ]
    .into_iter()
    .filter(|(present, _)| !present)
    .map(|(_, what)| what)
    .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(AppError::ValidationError(format!(
            "Password must contain {}",
            missing.join(", ")
        )))
    }
}

pub fn hash_password(password: &str) -> AppResult<String> {
    hash(password, DEFAULT_COST)
        .map_err(|e| AppError::InternalError(format!("Failed to hash password: {e}")))
}

pub fn verify_password(password: &str, hashed: &str) -> AppResult<bool> {
    verify(password, hashed)
        .map_err(|e| AppError::InternalError(format!("Failed to verify password: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(password: &str) -> String {
        match validate_password(password) {
            Err(AppError::ValidationError(m)) => m,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_password() {
        assert!(validate_password("Password123").is_ok());
        assert_eq!(message("password123"), "Password must contain an uppercase letter");
        assert_eq!(message("PASSWORD123"), "Password must contain a lowercase letter");
        assert_eq!(
            message("........"),
            "Password must contain an uppercase letter, a lowercase letter, a digit"
        );
        assert!(message("Pass123").contains("between 8 and 128"));
        assert!(validate_password(&format!("Aa1{}", "x".repeat(126))).is_err());
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // 7 个字符、超过 8 个字节
        assert!(validate_password("Пароль1").is_err());
        assert!(validate_password("Пароль12").is_ok());
    }

    #[test]
    fn test_hash_and_verify_password() {
        let hashed = hash_password("Password123").unwrap();
        assert!(verify_password("Password123", &hashed).unwrap());
        assert!(!verify_password("WrongPassword", &hashed).unwrap());
    }
}
