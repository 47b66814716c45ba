//! Investments module - domain models, services, and traits.

mod investment_type;
mod investments_model;
mod investments_service;
mod investments_traits;


pub use investment_type::{InvestmentType, InvestmentTypeInfo};
pub use investments_model::{parse_decimal, Investment, NewInvestment};
pub use investments_service::InvestmentService;
pub use investments_traits::{InvestmentRepositoryTrait, InvestmentServiceTrait};
