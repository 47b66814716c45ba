use nivesh_core::investments::{Investment, InvestmentRepositoryTrait, NewInvestment};
use nivesh_core::Result;

use super::model::{InvestmentDB, NewInvestmentDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::investments;
use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::SqliteConnection;

use std::sync::Arc;
use uuid::Uuid;

pub struct InvestmentRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl InvestmentRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        InvestmentRepository { pool, writer }
    }

    fn load_investments_impl(&self, owner_id: &str) -> Result<Vec<Investment>> {
        let mut conn = get_connection(&self.pool)?;
        // SQLite sorts NULL lowest, so undated records land last under DESC.
        let rows = investments::table
            .filter(investments::user_id.eq(owner_id))
            .order((
                investments::purchase_date.desc(),
                investments::created_at.desc(),
            ))
            .select(InvestmentDB::as_select())
            .load::<InvestmentDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(Investment::from).collect())
    }
}

#[async_trait]
impl InvestmentRepositoryTrait for InvestmentRepository {
    fn load_investments(&self, user_id: &str) -> Result<Vec<Investment>> {
        self.load_investments_impl(user_id)
    }

    async fn insert_new_investment(&self, new_investment: NewInvestment) -> Result<Investment> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Investment> {
                let row = NewInvestmentDB::from_domain(
                    new_investment,
                    Uuid::new_v4().to_string(),
                    Utc::now().naive_utc(),
                );

                let result_db = diesel::insert_into(investments::table)
                    .values(&row)
                    .returning(InvestmentDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(Investment::from(result_db))
            })
            .await
    }
}
