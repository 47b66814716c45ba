//! Database models for investments.

use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;
use log::warn;
use rust_decimal::Decimal;

use nivesh_core::investments::{parse_decimal, Investment, InvestmentType, NewInvestment};

/// Database model for investments
#[derive(Queryable, Identifiable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::investments)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct InvestmentDB {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub investment_type: String,
    pub quantity: Option<String>,
    pub purchase_price: Option<String>,
    pub current_price: Option<String>,
    pub purchase_date: Option<NaiveDate>,
    pub symbol: Option<String>,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
}

/// Database model for creating a new investment
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::investments)]
pub struct NewInvestmentDB {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub investment_type: String,
    pub quantity: Option<String>,
    pub purchase_price: Option<String>,
    pub current_price: Option<String>,
    pub purchase_date: Option<NaiveDate>,
    pub symbol: Option<String>,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
}

impl NewInvestmentDB {
    pub fn from_domain(domain: NewInvestment, id: String, created_at: NaiveDateTime) -> Self {
        Self {
            id,
            user_id: domain.user_id,
            name: domain.name.trim().to_string(),
            investment_type: domain.investment_type.as_str().to_string(),
            quantity: domain.quantity.map(|v| v.to_string()),
            purchase_price: domain.purchase_price.map(|v| v.to_string()),
            current_price: domain.current_price.map(|v| v.to_string()),
            purchase_date: domain.purchase_date,
            symbol: domain.symbol,
            notes: domain.notes,
            created_at,
        }
    }
}

/// Reads a stored decimal column. Unreadable text is treated as unavailable.
fn stored_decimal(record_id: &str, column: &str, raw: Option<String>) -> Option<Decimal> {
    let raw = raw?;
    if raw.trim().is_empty() {
        return None;
    }
    match parse_decimal(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(
                "Ignoring unreadable {} '{}' on investment {}: {}",
                column, raw, record_id, e
            );
            None
        }
    }
}

// Conversion to domain models
impl From<InvestmentDB> for Investment {
    fn from(db: InvestmentDB) -> Self {
        let quantity = stored_decimal(&db.id, "quantity", db.quantity);
        let purchase_price = stored_decimal(&db.id, "purchase_price", db.purchase_price);
        let current_price = stored_decimal(&db.id, "current_price", db.current_price);
        Self {
            investment_type: InvestmentType::from(db.investment_type.as_str()),
            id: db.id,
            user_id: db.user_id,
            name: db.name,
            quantity,
            purchase_price,
            current_price,
            purchase_date: db.purchase_date,
            symbol: db.symbol,
            notes: db.notes,
            created_at: db.created_at,
        }
    }
}
