//! 余额 / 水晶的扣款规则

/// 水晶抵扣比例：1 水晶 = 10 货币单位
pub const CURRENCY_PER_CRYSTAL: i64 = 10;

/// 充值赠送：每满 100 赠送 10 水晶
pub fn deposit_bonus_crystals(amount: i64) -> i64 {
    if amount <= 0 {
        return 0;
    }
    (amount / 100) * 10
}

/// 购票扣款方案
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Payment {
    pub balance_after: i64,
    pub crystals_after: i64,
    /// 实际从余额扣除的金额
    pub balance_spent: i64,
    /// 用于补足差额的水晶
    pub crystals_spent: i64,
}

/// 余额足够时直接扣余额；否则余额清零，差额按 10:1 用水晶补足（向上取整）
///
/// 余额与水晶都不足时返回 None。
pub fn plan_ticket_payment(balance: i64, crystals: i64, price: i64) -> Option<Payment> {
    if balance >= price {
        return Some(Payment {
            balance_after: balance - price,
            crystals_after: crystals,
            balance_spent: price,
            crystals_spent: 0,
        });
    }

    let available = balance.max(0);
    let shortfall = price - available;
    let crystals_needed = (shortfall + CURRENCY_PER_CRYSTAL - 1) / CURRENCY_PER_CRYSTAL;
    if crystals < crystals_needed {
        return None;
    }
    Some(Payment {
        balance_after: 0,
        crystals_after: crystals - crystals_needed,
        balance_spent: available,
        crystals_spent: crystals_needed,
    })
}
