use serde::{Deserialize, Serialize};

use crate::investments::Investment;
use crate::portfolio::allocation::{compute_allocation, with_shares, AllocationEntry};
use crate::portfolio::summary::{compute_summary, PortfolioSummary};
use crate::portfolio::valuation::{compute_record_derived, RecordDerived};

/// An investment record together with its derived values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentView {
    #[serde(flatten)]
    pub investment: Investment,
    #[serde(flatten)]
    pub derived: RecordDerived,
}

impl From<Investment> for InvestmentView {
    fn from(investment: Investment) -> Self {
        let derived = compute_record_derived(&investment);
        Self {
            investment,
            derived,
        }
    }
}

/// Summary, allocation and per-record values for one user's portfolio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioOverview {
    pub summary: PortfolioSummary,
    pub allocation: Vec<AllocationEntry>,
    pub investments: Vec<InvestmentView>,
}

impl PortfolioOverview {
    /// Runs the whole aggregation engine over `investments`, keeping their order.
    pub fn from_investments(investments: Vec<Investment>) -> Self {
        let summary = compute_summary(&investments);
        let allocation = with_shares(compute_allocation(&investments));
        Self {
            summary,
            allocation,
            investments: investments.into_iter().map(InvestmentView::from).collect(),
        }
    }
}
