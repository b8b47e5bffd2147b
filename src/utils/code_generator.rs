use uuid::Uuid;

const TICKET_CODE_PREFIX: &str = "TICKET-";

/// 生成票券兑换码，如 TICKET-1A2B3C4D
pub fn generate_ticket_code() -> String {
    let simple = Uuid::new_v4().simple().to_string().to_ascii_uppercase();
    format!("{TICKET_CODE_PREFIX}{}", &simple[..8])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_ticket_code() {
        let code = generate_ticket_code();
        assert_eq!(code.len(), TICKET_CODE_PREFIX.len() + 8);
        assert!(code.starts_with("TICKET-"));
        assert!(
            code[TICKET_CODE_PREFIX.len()..]
                .chars()
                .all(|c| c.is_ascii_digit() || c.is_ascii_uppercase())
        );
    }

    #[test]
    fn test_generate_multiple_codes_are_different() {
        // 32 位随机，碰撞概率可忽略
        assert_ne!(generate_ticket_code(), generate_ticket_code());
    }
}
