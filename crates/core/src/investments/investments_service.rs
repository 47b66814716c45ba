use log::{debug, error};
use std::sync::Arc;

use super::investments_model::{Investment, NewInvestment};
use super::investments_traits::{InvestmentRepositoryTrait, InvestmentServiceTrait};
use crate::errors::Result;
use crate::portfolio::{
    compute_allocation, compute_summary, with_shares, AllocationEntry, PortfolioOverview,
    PortfolioSummary,
};

/// Service for reading and recording investments.
pub struct InvestmentService {
    repository: Arc<dyn InvestmentRepositoryTrait>,
}

impl InvestmentService {
    /// Creates a new InvestmentService instance
    pub fn new(repository: Arc<dyn InvestmentRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait::async_trait]
impl InvestmentServiceTrait for InvestmentService {
    /// Lists the user's investments, most recent purchase first
    fn get_investments(&self, user_id: &str) -> Result<Vec<Investment>> {
        self.repository.load_investments(user_id).map_err(|e| {
            error!("Error loading investments for user {}: {}", user_id, e);
            e
        })
    }

    /// Validates and stores a new investment
    async fn create_investment(&self, new_investment: NewInvestment) -> Result<Investment> {
        new_investment.validate()?;
        debug!(
            "Creating {} investment '{}' for user {}",
            new_investment.investment_type, new_investment.name, new_investment.user_id
        );
        self.repository
            .insert_new_investment(new_investment)
            .await
            .map_err(|e| {
                error!("Error adding investment: {}", e);
                e
            })
    }

    fn get_portfolio_summary(&self, user_id: &str) -> Result<PortfolioSummary> {
        let investments = self.get_investments(user_id)?;
        Ok(compute_summary(&investments))
    }

    fn get_portfolio_allocation(&self, user_id: &str) -> Result<Vec<AllocationEntry>> {
        let investments = self.get_investments(user_id)?;
        Ok(with_shares(compute_allocation(&investments)))
    }

    /// Fetches the user's investments once and aggregates that snapshot
    fn get_portfolio_overview(&self, user_id: &str) -> Result<PortfolioOverview> {
        let investments = self.get_investments(user_id)?;
        Ok(PortfolioOverview::from_investments(investments))
    }
}
