use std::sync::Arc;

use crate::{
    auth::AuthenticatedUser,
    error::{run_blocking, ApiResult},
    main_lib::AppState,
};
use axum::{extract::State, routing::get, Extension, Json, Router};
use nivesh_core::portfolio::{AllocationEntry, PortfolioOverview, PortfolioSummary};

async fn get_portfolio_summary(
    State(state): State<Arc<AppState>>,
    Extension(AuthenticatedUser(user_id)): Extension<AuthenticatedUser>,
) -> ApiResult<Json<PortfolioSummary>> {
    let summary =
        run_blocking(move || state.investment_service.get_portfolio_summary(&user_id)).await?;
    Ok(Json(summary))
}

async fn get_portfolio_allocation(
    State(state): State<Arc<AppState>>,
    Extension(AuthenticatedUser(user_id)): Extension<AuthenticatedUser>,
) -> ApiResult<Json<Vec<AllocationEntry>>> {
    let allocation =
        run_blocking(move || state.investment_service.get_portfolio_allocation(&user_id)).await?;
    Ok(Json(allocation))
}

async fn get_portfolio_overview(
    State(state): State<Arc<AppState>>,
    Extension(AuthenticatedUser(user_id)): Extension<AuthenticatedUser>,
) -> ApiResult<Json<PortfolioOverview>> {
    let overview =
        run_blocking(move || state.investment_service.get_portfolio_overview(&user_id)).await?;
    Ok(Json(overview))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/portfolio/summary", get(get_portfolio_summary))
        .route("/portfolio/allocation", get(get_portfolio_allocation))
        .route("/portfolio/overview", get(get_portfolio_overview))
}
