use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::RecordDerived;
use crate::investments::Investment;

/// `quantity * purchase_price`, if both are known.
pub fn invested_value(investment: &Investment) -> Option<Decimal> {
    investment.quantity?.checked_mul(investment.purchase_price?)
}

/// `quantity * current_price`, if both are known.
pub fn current_value(investment: &Investment) -> Option<Decimal> {
    investment.quantity?.checked_mul(investment.current_price?)
}

/// Absolute gain or loss. Requires quantity and both prices.
pub fn gain_loss(investment: &Investment) -> Option<Decimal> {
    current_value(investment)?.checked_sub(invested_value(investment)?)
}

/// Price change relative to the purchase price, in percent.
///
/// Unavailable when either price is missing or the purchase price is zero.
/// Quantity is not needed. Arithmetic overflow also yields `None`.
pub fn gain_loss_percent(investment: &Investment) -> Option<Decimal> {
    let purchase_price = investment.purchase_price?;
    let current_price = investment.current_price?;
    if purchase_price.is_zero() {
        return None;
    }
    current_price
        .checked_sub(purchase_price)?
        .checked_div(purchase_price)?
        .checked_mul(dec!(100))
}

/// Runs every per-record derivation over one investment.
pub fn compute_record_derived(investment: &Investment) -> RecordDerived {
    RecordDerived {
        invested_value: invested_value(investment),
        current_value: current_value(investment),
        gain_loss: gain_loss(investment),
        gain_loss_percent: gain_loss_percent(investment),
    }
}
