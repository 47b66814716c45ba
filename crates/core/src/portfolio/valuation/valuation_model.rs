use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Values derived from a single investment record.
///
/// Each field is `None` when the inputs it needs are missing. `None` is
/// distinct from a computed zero and serializes as `null`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordDerived {
    pub invested_value: Option<Decimal>,
    pub current_value: Option<Decimal>,
    pub gain_loss: Option<Decimal>,
    pub gain_loss_percent: Option<Decimal>,
}
