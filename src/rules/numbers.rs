//! 彩票号码：6 个 1..=36 之间互不相同的数字，按升序保存

use rand::Rng;
use std::collections::BTreeSet;
use std::fmt;
use thiserror::Error;

/// 每张票的号码个数
pub const NUMBERS_PER_TICKET: usize = 6;
pub const MIN_NUMBER: u8 = 1;
pub const MAX_NUMBER: u8 = 36;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NumbersError {
    #[error("Exactly {} numbers must be selected, got {0}", NUMBERS_PER_TICKET)]
    WrongCount(usize),
    #[error("Number {0} is out of range {}-{}", MIN_NUMBER, MAX_NUMBER)]
    OutOfRange(i64),
    #[error("Number {0} is selected more than once")]
    Duplicate(i64),
    #[error("Invalid number list: {0}")]
    Malformed(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TicketNumbers([u8; NUMBERS_PER_TICKET]);

impl TicketNumbers {
    /// 校验用户选择的号码（顺序无关，结果升序）
    pub fn new(selected: &[i64]) -> Result<Self, NumbersError> {
        if selected.len() != NUMBERS_PER_TICKET {
            return Err(NumbersError::WrongCount(selected.len()));
        }
        let mut seen = BTreeSet::new();
        for &n in selected {
            if n < MIN_NUMBER as i64 || n > MAX_NUMBER as i64 {
                return Err(NumbersError::OutOfRange(n));
            }
            if !seen.insert(n as u8) {
                return Err(NumbersError::Duplicate(n));
            }
        }
        let mut out = [0u8; NUMBERS_PER_TICKET];
        for (slot, n) in out.iter_mut().zip(seen) {
            *slot = n;
        }
        Ok(Self(out))
    }

    /// 严格解析 "3,7,12,19,28,36"
    pub fn parse(s: &str) -> Result<Self, NumbersError> {
        let values = s
            .split(',')
            .map(|t| t.trim().parse::<i64>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| NumbersError::Malformed(s.to_string()))?;
        Self::new(&values)
    }

    /// 随机抽取 6 个不重复号码
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut picked = BTreeSet::new();
        while picked.len() < NUMBERS_PER_TICKET {
            picked.insert(rng.gen_range(MIN_NUMBER..=MAX_NUMBER));
        }
        let mut out = [0u8; NUMBERS_PER_TICKET];
        for (slot, n) in out.iter_mut().zip(picked) {
            *slot = n;
        }
        Self(out)
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    pub fn to_vec(&self) -> Vec<i64> {
        self.0.iter().map(|&n| n as i64).collect()
    }

    pub fn contains(&self, n: i64) -> bool {
        self.0.iter().any(|&x| x as i64 == n)
    }

    /// 统计一张票（已存储文本）与中奖号码的命中个数
    ///
    /// 票面号码按逗号拆分，无法解析的片段直接忽略（不会命中）；
    /// 重复的号码只计一次，保证结果落在 0..=6。
    pub fn count_matches(&self, stored: &str) -> usize {
        let picked: BTreeSet<i64> = parse_lenient(stored).into_iter().collect();
        picked.into_iter().filter(|&n| self.contains(n)).count()
    }
}

impl fmt::Display for TicketNumbers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(|n| n.to_string()).collect();
        write!(f, "{}", parts.join(","))
    }
}

/// 宽松解析：只保留能解析为整数的片段
pub fn parse_lenient(s: &str) -> Vec<i64> {
    s.split(',')
        .filter_map(|t| t.trim().parse::<i64>().ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_new_sorts_numbers() {
        let n = TicketNumbers::new(&[36, 1, 12, 7, 19, 28]).unwrap();
        assert_eq!(n.as_slice(), &[1, 7, 12, 19, 28, 36]);
        assert_eq!(n.to_string(), "1,7,12,19,28,36");
    }

    #[test]
    fn test_new_rejects_invalid_selections() {
        assert_eq!(
            TicketNumbers::new(&[1, 2, 3, 4, 5]),
            Err(NumbersError::WrongCount(5))
        );
        assert_eq!(
            TicketNumbers::new(&[0, 2, 3, 4, 5, 6]),
            Err(NumbersError::OutOfRange(0))
        );
        assert_eq!(
            TicketNumbers::new(&[1, 2, 3, 4, 5, 37]),
            Err(NumbersError::OutOfRange(37))
        );
        assert_eq!(
            TicketNumbers::new(&[1, 2, 3, 4, 5, 5]),
            Err(NumbersError::Duplicate(5))
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            NumbersError::WrongCount(5).to_string(),
            "Exactly 6 numbers must be selected, got 5"
        );
        assert_eq!(
            NumbersError::OutOfRange(37).to_string(),
            "Number 37 is out of range 1-36"
        );
    }

    #[test]
    fn test_parse() {
        let n = TicketNumbers::parse(" 5, 3,1 ,2,4,6").unwrap();
        assert_eq!(n.to_vec(), vec![1, 2, 3, 4, 5, 6]);
        assert!(matches!(
            TicketNumbers::parse("1,2,x,4,5,6"),
            Err(NumbersError::Malformed(_))
        ));
    }

    #[test]
    fn test_random_draws_are_always_valid() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..500 {
            let n = TicketNumbers::random(&mut rng);
            let v = n.as_slice();
            assert_eq!(v.len(), NUMBERS_PER_TICKET);
            assert!(v.windows(2).all(|w| w[0] < w[1]));
            assert!(v.iter().all(|&x| (MIN_NUMBER..=MAX_NUMBER).contains(&x)));
        }
    }

    #[test]
    fn test_count_matches() {
        let winning = TicketNumbers::new(&[1, 2, 3, 4, 5, 6]).unwrap();
        assert_eq!(winning.count_matches("1,2,3,4,5,6"), 6);
        assert_eq!(winning.count_matches("1,2,3,30,31,32"), 3);
        assert_eq!(winning.count_matches("30,31,32,33,34,35"), 0);
        // 无法解析的片段忽略，重复号码只计一次
        assert_eq!(winning.count_matches("1, abc,2,,2,2"), 2);
        assert_eq!(winning.count_matches(""), 0);
    }
}
