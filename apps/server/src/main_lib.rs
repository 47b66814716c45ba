use std::sync::Arc;

use crate::{
    auth::{decode_secret_key, AuthManager},
    config::Config,
};
use nivesh_core::investments::{InvestmentService, InvestmentServiceTrait};
use nivesh_storage_sqlite::{db, investments::InvestmentRepository};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub investment_service: Arc<dyn InvestmentServiceTrait + Send + Sync>,
    pub auth: Option<Arc<AuthManager>>,
    pub default_user_id: String,
}

pub fn init_tracing() {
    let log_format = std::env::var("NV_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let db_path = db::init(&config.db_path)?;
    tracing::info!("Database path in use: {}", db_path);

    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;
    let writer = db::spawn_writer((*pool).clone());

    let investment_repository = Arc::new(InvestmentRepository::new(pool.clone(), writer));
    let investment_service: Arc<dyn InvestmentServiceTrait + Send + Sync> =
        Arc::new(InvestmentService::new(investment_repository));

    let auth = match config.jwt_secret.as_deref() {
        Some(raw) => {
            let secret = decode_secret_key(raw)?;
            tracing::info!("Bearer token authentication enabled");
            Some(Arc::new(AuthManager::new(&secret)))
        }
        None => {
            tracing::warn!(
                "NV_JWT_SECRET not set; all requests act as user '{}'",
                config.default_user_id
            );
            None
        }
    };

    Ok(Arc::new(AppState {
        investment_service,
        auth,
        default_user_id: config.default_user_id.clone(),
    }))
}
