use anyhow::Result;
use async_trait::async_trait;
use diesel::{OptionalExtension, RunQueryDsl, insert_into, prelude::*, update};
use std::sync::Arc;
use tokio::task;

use crate::{
    domain::{
        entities::images::{ImageEntity, InsertImageEntity, UpdateImageEntity},
        repositories::images::ImageRepository,
    },
    infra::db::postgres::{postgres_connection::PgPoolSquad, schema::imagenes},
};

pub struct ImagePostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl ImagePostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl ImageRepository for ImagePostgres {
    async fn list(&self) -> Result<Vec<ImageEntity>> {
        let db_pool = Arc::clone(&self.db_pool);

        Ok(task::spawn_blocking(move || -> Result<Vec<ImageEntity>> {
            let mut conn = db_pool.get()?;

            let rows = imagenes::table
                .select(ImageEntity::as_select())
                .load::<ImageEntity>(&mut conn)?;

            Ok(rows)
        })
        .await??)
    }

    async fn find_by_id(&self, image_id: i32) -> Result<Option<ImageEntity>> {
        let db_pool = Arc::clone(&self.db_pool);

        Ok(task::spawn_blocking(move || -> Result<Option<ImageEntity>> {
            let mut conn = db_pool.get()?;

            let row = imagenes::table
                .filter(imagenes::id.eq(image_id))
                .select(ImageEntity::as_select())
                .first::<ImageEntity>(&mut conn)
                .optional()?;

            Ok(row)
        })
        .await??)
    }

    async fn create(&self, insert_entity: InsertImageEntity) -> Result<ImageEntity> {
        let db_pool = Arc::clone(&self.db_pool);

        Ok(task::spawn_blocking(move || -> Result<ImageEntity> {
            let mut conn = db_pool.get()?;

            let row = insert_into(imagenes::table)
                .values(&insert_entity)
                .returning(ImageEntity::as_returning())
                .get_result::<ImageEntity>(&mut conn)?;

            Ok(row)
        })
        .await??)
    }

    async fn update(
        &self,
        image_id: i32,
        update_entity: UpdateImageEntity,
    ) -> Result<Option<ImageEntity>> {
        let db_pool = Arc::clone(&self.db_pool);

        Ok(task::spawn_blocking(move || -> Result<Option<ImageEntity>> {
            let mut conn = db_pool.get()?;

            let row = update(imagenes::table.filter(imagenes::id.eq(image_id)))
                .set(&update_entity)
                .returning(ImageEntity::as_returning())
                .get_result::<ImageEntity>(&mut conn)
                .optional()?;

            Ok(row)
        })
        .await??)
    }

    async fn delete(&self, image_id: i32) -> Result<Option<ImageEntity>> {
        let db_pool = Arc::clone(&self.db_pool);

        Ok(task::spawn_blocking(move || -> Result<Option<ImageEntity>> {
            let mut conn = db_pool.get()?;

            let row = diesel::delete(imagenes::table.filter(imagenes::id.eq(image_id)))
                .returning(ImageEntity::as_returning())
                .get_result::<ImageEntity>(&mut conn)
                .optional()?;

            Ok(row)
        })
        .await??)
    }
}
