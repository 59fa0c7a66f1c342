use anyhow::Result;
use async_trait::async_trait;
use diesel::{OptionalExtension, RunQueryDsl, insert_into, prelude::*, update};
use std::sync::Arc;
use tokio::task;

use crate::{
    domain::{
        entities::pricing_plans::{
            InsertPricingPlanEntity, PricingPlanEntity, UpdatePricingPlanEntity,
        },
        repositories::pricing_plans::PricingPlanRepository,
    },
    infra::db::postgres::{postgres_connection::PgPoolSquad, schema::precios},
};

pub struct PricingPlanPostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl PricingPlanPostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }
}

// Diesel is synchronous; every statement runs on the blocking threadpool.
#[async_trait]
impl PricingPlanRepository for PricingPlanPostgres {
    async fn list(&self) -> Result<Vec<PricingPlanEntity>> {
        let db_pool = Arc::clone(&self.db_pool);

        Ok(task::spawn_blocking(move || -> Result<Vec<PricingPlanEntity>> {
            let mut conn = db_pool.get()?;

            let rows = precios::table
                .select(PricingPlanEntity::as_select())
                .load::<PricingPlanEntity>(&mut conn)?;

            Ok(rows)
        })
        .await??)
    }

    async fn create(&self, insert_entity: InsertPricingPlanEntity) -> Result<PricingPlanEntity> {
        let db_pool = Arc::clone(&self.db_pool);

        Ok(task::spawn_blocking(move || -> Result<PricingPlanEntity> {
            let mut conn = db_pool.get()?;

            let row = insert_into(precios::table)
                .values(&insert_entity)
                .returning(PricingPlanEntity::as_returning())
                .get_result::<PricingPlanEntity>(&mut conn)?;

            Ok(row)
        })
        .await??)
    }

    async fn update(
        &self,
        plan_id: i32,
        update_entity: UpdatePricingPlanEntity,
    ) -> Result<Option<PricingPlanEntity>> {
        let db_pool = Arc::clone(&self.db_pool);

        Ok(task::spawn_blocking(move || -> Result<Option<PricingPlanEntity>> {
            let mut conn = db_pool.get()?;

            let row = update(precios::table.filter(precios::id.eq(plan_id)))
                .set(&update_entity)
                .returning(PricingPlanEntity::as_returning())
                .get_result::<PricingPlanEntity>(&mut conn)
                .optional()?;

            Ok(row)
        })
        .await??)
    }
}
