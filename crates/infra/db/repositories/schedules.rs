use anyhow::Result;
use async_trait::async_trait;
use diesel::{OptionalExtension, RunQueryDsl, insert_into, prelude::*, update};
use std::sync::Arc;
use tokio::task;

use crate::{
    domain::{
        entities::schedules::{InsertScheduleEntity, ScheduleEntity, UpdateScheduleEntity},
        repositories::schedules::ScheduleRepository,
    },
    infra::db::postgres::{postgres_connection::PgPoolSquad, schema::horarios},
};

pub struct SchedulePostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl SchedulePostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl ScheduleRepository for SchedulePostgres {
    async fn list(&self) -> Result<Vec<ScheduleEntity>> {
        let db_pool = Arc::clone(&self.db_pool);

        Ok(task::spawn_blocking(move || -> Result<Vec<ScheduleEntity>> {
            let mut conn = db_pool.get()?;

            let rows = horarios::table
                .select(ScheduleEntity::as_select())
                .load::<ScheduleEntity>(&mut conn)?;

            Ok(rows)
        })
        .await??)
    }

    async fn find_by_id(&self, schedule_id: i32) -> Result<Option<ScheduleEntity>> {
        let db_pool = Arc::clone(&self.db_pool);

        Ok(task::spawn_blocking(move || -> Result<Option<ScheduleEntity>> {
            let mut conn = db_pool.get()?;

            let row = horarios::table
                .filter(horarios::id.eq(schedule_id))
                .select(ScheduleEntity::as_select())
                .first::<ScheduleEntity>(&mut conn)
                .optional()?;

            Ok(row)
        })
        .await??)
    }

    async fn create(&self, insert_entity: InsertScheduleEntity) -> Result<ScheduleEntity> {
        let db_pool = Arc::clone(&self.db_pool);

        Ok(task::spawn_blocking(move || -> Result<ScheduleEntity> {
            let mut conn = db_pool.get()?;

            let row = insert_into(horarios::table)
                .values(&insert_entity)
                .returning(ScheduleEntity::as_returning())
                .get_result::<ScheduleEntity>(&mut conn)?;

            Ok(row)
        })
        .await??)
    }

    async fn update(
        &self,
        schedule_id: i32,
        update_entity: UpdateScheduleEntity,
    ) -> Result<Option<ScheduleEntity>> {
        let db_pool = Arc::clone(&self.db_pool);

        Ok(task::spawn_blocking(move || -> Result<Option<ScheduleEntity>> {
            let mut conn = db_pool.get()?;

            let row = update(horarios::table.filter(horarios::id.eq(schedule_id)))
                .set(&update_entity)
                .returning(ScheduleEntity::as_returning())
                .get_result::<ScheduleEntity>(&mut conn)
                .optional()?;

            Ok(row)
        })
        .await??)
    }

    async fn delete(&self, schedule_id: i32) -> Result<Option<ScheduleEntity>> {
        let db_pool = Arc::clone(&self.db_pool);

        Ok(task::spawn_blocking(move || -> Result<Option<ScheduleEntity>> {
            let mut conn = db_pool.get()?;

            let row = diesel::delete(horarios::table.filter(horarios::id.eq(schedule_id)))
                .returning(ScheduleEntity::as_returning())
                .get_result::<ScheduleEntity>(&mut conn)
                .optional()?;

            Ok(row)
        })
        .await??)
    }
}
