//! Allocation models for the portfolio breakdown chart.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::investments::InvestmentType;

/// One wedge of the allocation chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationSlice {
    /// Upper-cased label, e.g. "MUTUAL FUNDS"
    pub category: String,
    #[serde(rename = "type")]
    pub investment_type: InvestmentType,
    /// Current value of the group, rounded to a whole currency unit
    pub value: Decimal,
    /// Chart color (hex code)
    pub color: String,
}

/// A slice together with its share of the chart total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationEntry {
    #[serde(flatten)]
    pub slice: AllocationSlice,
    /// Percentage of the sum of all slice values, one decimal place.
    /// `None` when every slice is zero.
    pub percentage: Option<Decimal>,
}
