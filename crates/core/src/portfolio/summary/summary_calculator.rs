use log::{debug, warn};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::PortfolioSummary;
use crate::investments::Investment;
use crate::portfolio::valuation::{current_value, invested_value};

/// Adds up the available values produced by `value_of`.
///
/// A record whose value would overflow the running total is left out and
/// logged; the total never wraps or panics.
fn checked_total(
    investments: &[Investment],
    label: &str,
    value_of: fn(&Investment) -> Option<Decimal>,
) -> Decimal {
    investments.iter().fold(Decimal::ZERO, |total, investment| {
        let Some(value) = value_of(investment) else {
            return total;
        };
        total.checked_add(value).unwrap_or_else(|| {
            warn!(
                "Skipping {} of investment {}: total would overflow",
                label, investment.id
            );
            total
        })
    })
}

/// Aggregates a snapshot of investments into portfolio totals.
///
/// Records whose invested (or current) value is unavailable are skipped in
/// the corresponding sum. Unlike the per-record percentage, the portfolio
/// percentage is defined as zero when `total_invested` is not positive.
pub fn compute_summary(investments: &[Investment]) -> PortfolioSummary {
    let total_invested = checked_total(investments, "invested value", invested_value);
    let total_current_value = checked_total(investments, "current value", current_value);

    let total_gain_loss = total_current_value
        .checked_sub(total_invested)
        .unwrap_or_else(|| {
            warn!("Portfolio gain/loss overflowed; reporting zero");
            Decimal::ZERO
        });

    let total_gain_loss_percent = if total_invested > Decimal::ZERO {
        total_gain_loss
            .checked_div(total_invested)
            .and_then(|ratio| ratio.checked_mul(dec!(100)))
            .unwrap_or_else(|| {
                warn!("Portfolio gain/loss percentage overflowed; reporting zero");
                Decimal::ZERO
            })
    } else {
        Decimal::ZERO
    };

    debug!(
        "Summarized {} investments: invested {}, current {}",
        investments.len(),
        total_invested,
        total_current_value
    );

    PortfolioSummary {
        total_invested,
        total_current_value,
        total_gain_loss,
        total_gain_loss_percent,
    }
}
