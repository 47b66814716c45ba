use async_trait::async_trait;

use super::investments_model::{Investment, NewInvestment};
use crate::errors::Result;
use crate::portfolio::{AllocationEntry, PortfolioOverview, PortfolioSummary};

/// Trait for investment repository operations
#[async_trait]
pub trait InvestmentRepositoryTrait: Send + Sync {
    /// Loads every investment owned by `user_id`, most recent purchase first.
    /// Rows without a purchase date come after dated rows.
    fn load_investments(&self, user_id: &str) -> Result<Vec<Investment>>;
    async fn insert_new_investment(&self, new_investment: NewInvestment) -> Result<Investment>;
}

/// Trait for investment service operations
#[async_trait]
pub trait InvestmentServiceTrait: Send + Sync {
    fn get_investments(&self, user_id: &str) -> Result<Vec<Investment>>;
    async fn create_investment(&self, new_investment: NewInvestment) -> Result<Investment>;
    fn get_portfolio_summary(&self, user_id: &str) -> Result<PortfolioSummary>;
    fn get_portfolio_allocation(&self, user_id: &str) -> Result<Vec<AllocationEntry>>;
    fn get_portfolio_overview(&self, user_id: &str) -> Result<PortfolioOverview>;
}
