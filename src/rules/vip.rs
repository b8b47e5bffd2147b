//! VIP 等级 (0..=10)

pub const MAX_VIP_LEVEL: i32 = 10;

/// 每升一级所需水晶 = 目标等级 * 100
pub const CRYSTALS_PER_LEVEL: i64 = 100;

/// 提升等级，封顶 MAX_VIP_LEVEL
pub fn raise(level: i32, by: i32) -> i32 {
    (level.max(0) + by).min(MAX_VIP_LEVEL)
}

pub fn next_level(level: i32) -> i32 {
    raise(level, 1)
}

pub fn crystals_required_for_next(level: i32) -> i64 {
    next_level(level) as i64 * CRYSTALS_PER_LEVEL
}

const BENEFITS: [(i32, &str); 10] = [
    (1, "5% discount on tickets"),
    (2, "+10 bonus crystals on deposit"),
    (3, "Daily bonus +5 crystals"),
    (4, "10% discount on tickets"),
    (5, "Access to the admin panel"),
    (6, "Daily bonus +10 crystals"),
    (7, "15% discount on tickets"),
    (8, "+50 bonus crystals on deposit"),
    (9, "Daily bonus +20 crystals"),
    (10, "20% discount on tickets + priority support"),
];

/// 当前等级已解锁的权益
pub fn benefits_up_to(level: i32) -> Vec<(i32, &'static str)> {
    BENEFITS.iter().copied().filter(|(l, _)| *l <= level).collect()
}

/// 下一级新增的权益（满级为空）
pub fn benefits_at_next(level: i32) -> Vec<(i32, &'static str)> {
    if level >= MAX_VIP_LEVEL {
        return Vec::new();
    }
    let next = next_level(level);
    BENEFITS.iter().copied().filter(|(l, _)| *l == next).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raise_is_clamped() {
        assert_eq!(raise(0, 1), 1);
        assert_eq!(raise(9, 2), 10);
        assert_eq!(raise(10, 1), 10);
        assert_eq!(raise(-3, 1), 1);
    }

    #[test]
    fn test_next_level_requirements() {
        assert_eq!(next_level(0), 1);
        assert_eq!(crystals_required_for_next(0), 100);
        assert_eq!(crystals_required_for_next(4), 500);
        assert_eq!(crystals_required_for_next(10), 1000);
    }

    #[test]
    fn test_benefits() {
        assert!(benefits_up_to(0).is_empty());
        assert_eq!(benefits_up_to(5).len(), 5);
        assert_eq!(benefits_at_next(4), vec![(5, "Access to the admin panel")]);
        assert!(benefits_at_next(10).is_empty());
    }
}
