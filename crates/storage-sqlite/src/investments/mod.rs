//! SQLite storage implementation for investments.

mod model;
mod repository;


pub use model::{InvestmentDB, NewInvestmentDB};
pub use repository::InvestmentRepository;
