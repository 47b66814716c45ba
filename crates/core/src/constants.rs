/// Decimal places for allocation shares shown on the chart
pub const ALLOCATION_SHARE_PRECISION: u32 = 1;

/// Chart color used when a category has no palette entry of its own
pub const NEUTRAL_CHART_COLOR: &str = "#6b7280";
