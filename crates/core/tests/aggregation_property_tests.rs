//! Property-based tests for the portfolio aggregation engine.
//!
//! These tests verify that the engine's invariants hold across randomly
//! generated portfolios, using the `proptest` crate.

use chrono::NaiveDate;
use nivesh_core::investments::{Investment, InvestmentType};
use nivesh_core::portfolio::{
    allocation_shares, compute_allocation, compute_record_derived, compute_summary,
    PortfolioOverview,
};
use proptest::prelude::*;
use rust_decimal::Decimal;

// =============================================================================
// Generators
// =============================================================================

fn arb_type() -> impl Strategy<Value = InvestmentType> {
    prop_oneof![
        Just(InvestmentType::Stocks),
        Just(InvestmentType::MutualFunds),
        Just(InvestmentType::Crypto),
        Just(InvestmentType::Gold),
        Just(InvestmentType::RealEstate),
        Just(InvestmentType::Other),
    ]
}

/// Non-negative amount with up to four decimal places.
fn arb_amount() -> impl Strategy<Value = Decimal> {
    (0i64..100_000_000, 0u32..=4).prop_map(|(mantissa, scale)| Decimal::new(mantissa, scale))
}

fn arb_investment() -> impl Strategy<Value = Investment> {
    (
        arb_type(),
        proptest::option::of(arb_amount()),
        proptest::option::of(arb_amount()),
        proptest::option::of(arb_amount()),
        "[a-z0-9]{8}",
    )
        .prop_map(|(investment_type, quantity, purchase_price, current_price, id)| Investment {
            id,
            user_id: "user".to_string(),
            name: "Holding".to_string(),
            investment_type,
            quantity,
            purchase_price,
            current_price,
            purchase_date: None,
            symbol: None,
            notes: None,
            created_at: NaiveDate::from_ymd_opt(2025, 1, 1)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
        })
}

fn arb_investments(max_count: usize) -> impl Strategy<Value = Vec<Investment>> {
    proptest::collection::vec(arb_investment(), 0..=max_count)
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Gain/loss is unavailable whenever any of its three inputs is missing.
    #[test]
    fn prop_gain_loss_requires_all_inputs(investment in arb_investment()) {
        let derived = compute_record_derived(&investment);
        let complete = investment.quantity.is_some()
            && investment.purchase_price.is_some()
            && investment.current_price.is_some();
        prop_assert_eq!(derived.gain_loss.is_some(), complete);
    }

    /// Per-record percentage never divides by a zero purchase price.
    #[test]
    fn prop_percent_unavailable_for_zero_purchase_price(investment in arb_investment()) {
        let derived = compute_record_derived(&investment);
        if investment.purchase_price.map_or(true, |p| p.is_zero()) {
            prop_assert!(derived.gain_loss_percent.is_none());
        }
    }

    /// Total gain/loss is exactly current value minus invested.
    #[test]
    fn prop_total_gain_loss_is_exact(investments in arb_investments(30)) {
        let summary = compute_summary(&investments);
        prop_assert_eq!(
            summary.total_gain_loss,
            summary.total_current_value - summary.total_invested
        );
        if summary.total_invested.is_zero() {
            prop_assert_eq!(summary.total_gain_loss_percent, Decimal::ZERO);
        }
    }

    /// Slice values add up to the valued total, within one unit per slice.
    #[test]
    fn prop_slices_sum_to_rounded_current_value(investments in arb_investments(30)) {
        let slices = compute_allocation(&investments);
        let slice_total: Decimal = slices.iter().map(|s| s.value).sum();
        let valued_total: Decimal = investments
            .iter()
            .filter_map(|i| Some(i.quantity? * i.current_price?))
            .sum();

        let tolerance = Decimal::from(slices.len().max(1));
        prop_assert!((slice_total - valued_total).abs() <= tolerance);
    }

    /// One slice per type, in order of first appearance.
    #[test]
    fn prop_slices_are_unique_and_in_encounter_order(investments in arb_investments(30)) {
        let slices = compute_allocation(&investments);

        let mut expected: Vec<InvestmentType> = Vec::new();
        for investment in &investments {
            let valued = matches!(
                (investment.quantity, investment.current_price),
                (Some(q), Some(p)) if !q.is_zero() && !p.is_zero()
            );
            if valued && !expected.contains(&investment.investment_type) {
                expected.push(investment.investment_type);
            }
        }
        let actual: Vec<InvestmentType> = slices.iter().map(|s| s.investment_type).collect();
        prop_assert_eq!(actual, expected);
    }

    /// Shares never panic and are either all present or all absent.
    #[test]
    fn prop_shares_are_total(investments in arb_investments(30)) {
        let slices = compute_allocation(&investments);
        let shares = allocation_shares(&slices);
        prop_assert_eq!(shares.len(), slices.len());
        let present = shares.iter().filter(|s| s.is_some()).count();
        prop_assert!(present == 0 || present == shares.len());
    }

    /// Amounts near the top of the decimal range never panic.
    #[test]
    fn prop_aggregation_survives_huge_amounts(
        mantissas in proptest::collection::vec(0i128..=79_228_162_514_264_337_593_543_950_335i128, 0..6)
    ) {
        let investments: Vec<Investment> = mantissas
            .into_iter()
            .enumerate()
            .map(|(i, mantissa)| Investment {
                id: format!("huge-{i}"),
                user_id: "user".to_string(),
                name: "Holding".to_string(),
                investment_type: InvestmentType::Stocks,
                quantity: Some(Decimal::from_i128_with_scale(mantissa, 0)),
                purchase_price: Some(Decimal::ONE),
                current_price: Some(Decimal::TWO),
                purchase_date: None,
                symbol: None,
                notes: None,
                created_at: NaiveDate::from_ymd_opt(2025, 1, 1)
                    .unwrap()
                    .and_hms_opt(0, 0, 0)
                    .unwrap(),
            })
            .collect();

        let overview = PortfolioOverview::from_investments(investments);
        prop_assert!(overview.allocation.len() <= 1);
    }

    /// Recomputing from the same snapshot gives identical output.
    #[test]
    fn prop_aggregation_is_deterministic(investments in arb_investments(20)) {
        let first = PortfolioOverview::from_investments(investments.clone());
        let second = PortfolioOverview::from_investments(investments);
        prop_assert_eq!(first, second);
    }
}
