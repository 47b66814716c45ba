//! Closed set of investment categories and their presentation table.

use serde::{Deserialize, Serialize};

use crate::constants::NEUTRAL_CHART_COLOR;

/// Category of a held asset.
///
/// Stored and transmitted as a snake_case token. Any token outside the set
/// (including an empty one) reads back as [`InvestmentType::Other`] instead of
/// failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum InvestmentType {
    Stocks,
    MutualFunds,
    Crypto,
    Gold,
    RealEstate,
    #[default]
    Other,
}

/// Static presentation data for one [`InvestmentType`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentTypeInfo {
    #[serde(rename = "value")]
    pub investment_type: InvestmentType,
    pub display_name: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
}

impl InvestmentType {
    pub const ALL: [InvestmentType; 6] = [
        InvestmentType::Stocks,
        InvestmentType::MutualFunds,
        InvestmentType::Crypto,
        InvestmentType::Gold,
        InvestmentType::RealEstate,
        InvestmentType::Other,
    ];

    /// Wire/storage token.
    pub fn as_str(&self) -> &'static str {
        match self {
            InvestmentType::Stocks => "stocks",
            InvestmentType::MutualFunds => "mutual_funds",
            InvestmentType::Crypto => "crypto",
            InvestmentType::Gold => "gold",
            InvestmentType::RealEstate => "real_estate",
            InvestmentType::Other => "other",
        }
    }

    /// Folds a raw token into the closed set. Matching ignores surrounding
    /// whitespace and ASCII case.
    pub fn from_token(token: &str) -> Self {
        let token = token.trim();
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(token))
            .unwrap_or(InvestmentType::Other)
    }

    /// Chart label: the token with underscores replaced by spaces, upper-cased.
    pub fn chart_label(&self) -> String {
        self.as_str().replace('_', " ").to_uppercase()
    }

    pub fn info(&self) -> InvestmentTypeInfo {
        let (display_name, icon, color) = match self {
            InvestmentType::Stocks => ("Stocks", "📈", "#3b82f6"),
            InvestmentType::MutualFunds => ("Mutual Funds", "💼", "#8b5cf6"),
            InvestmentType::Crypto => ("Cryptocurrency", "₿", "#f97316"),
            InvestmentType::Gold => ("Gold", "🪙", "#f59e0b"),
            InvestmentType::RealEstate => ("Real Estate", "🏠", "#10b981"),
            InvestmentType::Other => ("Other", "💰", NEUTRAL_CHART_COLOR),
        };
        InvestmentTypeInfo {
            investment_type: *self,
            display_name,
            icon,
            color,
        }
    }

    pub fn chart_color(&self) -> &'static str {
        self.info().color
    }

    /// Presentation table for every type, in picker order.
    pub fn catalog() -> Vec<InvestmentTypeInfo> {
        Self::ALL.iter().map(InvestmentType::info).collect()
    }
}

impl std::fmt::Display for InvestmentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for InvestmentType {
    fn from(token: &str) -> Self {
        InvestmentType::from_token(token)
    }
}

impl From<String> for InvestmentType {
    fn from(token: String) -> Self {
        InvestmentType::from_token(&token)
    }
}

impl From<InvestmentType> for String {
    fn from(investment_type: InvestmentType) -> Self {
        investment_type.as_str().to_string()
    }
}
