use std::sync::Arc;

use crate::{
    auth::AuthenticatedUser,
    error::{run_blocking, ApiError, ApiResult},
    main_lib::AppState,
};
use axum::{
    extract::{rejection::JsonRejection, State},
    routing::get,
    Extension, Json, Router,
};
use nivesh_core::investments::{Investment, InvestmentType, InvestmentTypeInfo, NewInvestment};
use nivesh_core::portfolio::InvestmentView;

async fn get_investments(
    State(state): State<Arc<AppState>>,
    Extension(AuthenticatedUser(user_id)): Extension<AuthenticatedUser>,
) -> ApiResult<Json<Vec<InvestmentView>>> {
    let investments =
        run_blocking(move || state.investment_service.get_investments(&user_id)).await?;
    Ok(Json(
        investments.into_iter().map(InvestmentView::from).collect(),
    ))
}

async fn create_investment(
    State(state): State<Arc<AppState>>,
    Extension(AuthenticatedUser(user_id)): Extension<AuthenticatedUser>,
    payload: Result<Json<NewInvestment>, JsonRejection>,
) -> ApiResult<Json<Investment>> {
    let Json(mut new_investment) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    // Ownership always comes from the caller's identity.
    new_investment.user_id = user_id;
    let created = state
        .investment_service
        .create_investment(new_investment)
        .await?;
    Ok(Json(created))
}

async fn get_investment_types() -> Json<Vec<InvestmentTypeInfo>> {
    Json(InvestmentType::catalog())
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/investments", get(get_investments).post(create_investment))
        .route("/investments/types", get(get_investment_types))
}
