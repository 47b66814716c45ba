//! Investment domain models.

use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use serde_with::{serde_as, NoneAsEmptyString};

use super::investment_type::InvestmentType;
use crate::{errors::ValidationError, Error, Result};

/// Domain model representing one held asset.
///
/// `quantity`, `purchase_price` and `current_price` are independently
/// optional. A missing value stays `None`; it is never read as zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Investment {
    pub id: String,
    pub user_id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub investment_type: InvestmentType,
    pub quantity: Option<Decimal>,
    pub purchase_price: Option<Decimal>,
    pub current_price: Option<Decimal>,
    pub purchase_date: Option<NaiveDate>,
    pub symbol: Option<String>,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
}

/// Input model for creating a new investment, as submitted by the add form.
///
/// Blank form inputs are coerced to `None` during deserialization: an empty
/// price field means "unknown", not zero.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct NewInvestment {
    #[serde(default)]
    pub user_id: String,
    pub name: String,
    #[serde(rename = "type", default, deserialize_with = "deserialize_type_or_other")]
    pub investment_type: InvestmentType,
    #[serde(default, deserialize_with = "deserialize_blank_decimal")]
    pub quantity: Option<Decimal>,
    #[serde(default, deserialize_with = "deserialize_blank_decimal")]
    pub purchase_price: Option<Decimal>,
    #[serde(default, deserialize_with = "deserialize_blank_decimal")]
    pub current_price: Option<Decimal>,
    #[serde(default, deserialize_with = "deserialize_blank_date")]
    pub purchase_date: Option<NaiveDate>,
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub notes: Option<String>,
}

impl NewInvestment {
    /// Validates the new investment data.
    pub fn validate(&self) -> Result<()> {
        if self.user_id.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "userId".to_string(),
            )));
        }
        if self.name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Investment name cannot be empty".to_string(),
            )));
        }
        for (field, value) in [
            ("quantity", self.quantity),
            ("purchasePrice", self.purchase_price),
            ("currentPrice", self.current_price),
        ] {
            if matches!(value, Some(v) if v < Decimal::ZERO) {
                return Err(Error::Validation(ValidationError::InvalidInput(format!(
                    "{} cannot be negative",
                    field
                ))));
            }
        }
        Ok(())
    }
}

/// Parses a decimal that may be written in plain or scientific notation.
pub fn parse_decimal(raw: &str) -> Result<Decimal> {
    let trimmed = raw.trim();
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(Error::from)
}

fn deserialize_blank_decimal<'de, D>(deserializer: D) -> std::result::Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error as _;

    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) if s.trim().is_empty() => Ok(None),
        Some(Value::String(s)) => parse_decimal(&s).map(Some).map_err(D::Error::custom),
        Some(Value::Number(n)) => parse_decimal(&n.to_string())
            .map(Some)
            .map_err(D::Error::custom),
        Some(other) => Err(D::Error::custom(format!(
            "expected a number or numeric string, found {}",
            other
        ))),
    }
}

fn deserialize_blank_date<'de, D>(deserializer: D) -> std::result::Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error as _;

    match Option::<String>::deserialize(deserializer)? {
        None => Ok(None),
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(Some)
            .map_err(D::Error::custom),
    }
}

fn deserialize_type_or_other<'de, D>(deserializer: D) -> std::result::Result<InvestmentType, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?
        .map(InvestmentType::from)
        .unwrap_or_default())
}
