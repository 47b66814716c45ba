use log::{debug, warn};
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

use super::{AllocationEntry, AllocationSlice, OrderedGroups};
use crate::constants::ALLOCATION_SHARE_PRECISION;
use crate::investments::{Investment, InvestmentType};

/// Rounds half-up to a whole currency unit (2.5 -> 3, -2.5 -> -2).
pub fn round_to_whole_unit(value: Decimal) -> Decimal {
    if value.fract().is_zero() {
        return value;
    }
    value
        .checked_add(dec!(0.5))
        .map(|shifted| shifted.floor())
        .unwrap_or_else(|| value.floor())
}

/// Value a record adds to its type's slice.
///
/// A record needs a non-zero quantity and a non-zero current price to take
/// part; a zero in either adds nothing and opens no slice.
fn allocation_value(investment: &Investment) -> Option<Decimal> {
    let quantity = investment.quantity.filter(|q| !q.is_zero())?;
    let current_price = investment.current_price.filter(|p| !p.is_zero())?;
    quantity.checked_mul(current_price)
}

/// Groups investments by type and sums their current value.
///
/// Records without a usable value neither add to nor open a group. Slices
/// come out in the order each type is first seen in `investments`. A record
/// that would overflow its group's total is skipped and logged.
pub fn compute_allocation(investments: &[Investment]) -> Vec<AllocationSlice> {
    let mut groups: OrderedGroups<InvestmentType, Decimal> = OrderedGroups::new();

    for investment in investments {
        let Some(value) = allocation_value(investment) else {
            continue;
        };
        let group = groups.entry_or_insert_with(investment.investment_type, || Decimal::ZERO);
        match group.checked_add(value) {
            Some(total) => *group = total,
            None => warn!(
                "Skipping investment {} in {} allocation: total would overflow",
                investment.id, investment.investment_type
            ),
        }
    }

    let slices: Vec<AllocationSlice> = groups
        .into_iter()
        .map(|(investment_type, value)| AllocationSlice {
            category: investment_type.chart_label(),
            investment_type,
            value: round_to_whole_unit(value),
            color: investment_type.chart_color().to_string(),
        })
        .collect();

    debug!(
        "Grouped {} investments into {} allocation slices",
        investments.len(),
        slices.len()
    );
    slices
}

/// Share of each slice in the chart total, in percent.
///
/// Every entry is `None` when the slices sum to zero or the sum cannot be
/// represented.
pub fn allocation_shares(slices: &[AllocationSlice]) -> Vec<Option<Decimal>> {
    let total = slices
        .iter()
        .try_fold(Decimal::ZERO, |total, slice| total.checked_add(slice.value));
    let total = match total {
        Some(total) if !total.is_zero() => total,
        Some(_) => return vec![None; slices.len()],
        None => {
            warn!("Allocation total overflowed; shares unavailable");
            return vec![None; slices.len()];
        }
    };

    slices
        .iter()
        .map(|slice| {
            slice
                .value
                .checked_div(total)?
                .checked_mul(dec!(100))
                .map(|share| {
                    share.round_dp_with_strategy(
                        ALLOCATION_SHARE_PRECISION,
                        RoundingStrategy::MidpointAwayFromZero,
                    )
                })
        })
        .collect()
}

/// Pairs every slice with its share of the total.
pub fn with_shares(slices: Vec<AllocationSlice>) -> Vec<AllocationEntry> {
    let shares = allocation_shares(&slices);
    slices
        .into_iter()
        .zip(shares)
        .map(|(slice, percentage)| AllocationEntry { slice, percentage })
        .collect()
}
