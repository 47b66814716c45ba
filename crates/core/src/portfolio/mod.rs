//! Portfolio aggregation engine.
//!
//! Pure functions over an in-memory snapshot of investment records. Nothing
//! here performs I/O or keeps state, so recomputing on every request is safe
//! and yields identical output for identical input.

pub mod allocation;
pub mod overview;
pub mod summary;
pub mod valuation;


pub use allocation::{
    allocation_shares, compute_allocation, with_shares, AllocationEntry, AllocationSlice,
};
pub use overview::{InvestmentView, PortfolioOverview};
pub use summary::{compute_summary, PortfolioSummary};
pub use valuation::{compute_record_derived, RecordDerived};
