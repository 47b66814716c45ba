use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Totals shown in the dashboard stat cards.
///
/// All four figures are always defined. An empty portfolio is all zeros.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    pub total_invested: Decimal,
    pub total_current_value: Decimal,
    pub total_gain_loss: Decimal,
    /// Return on `total_invested`, in percent. Zero when nothing is invested.
    pub total_gain_loss_percent: Decimal,
}
