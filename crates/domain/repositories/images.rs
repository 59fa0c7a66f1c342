use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;

use crate::domain::entities::images::{ImageEntity, InsertImageEntity, UpdateImageEntity};

#[async_trait]
#[automock]
pub trait ImageRepository {
    async fn list(&self) -> Result<Vec<ImageEntity>>;
    async fn find_by_id(&self, image_id: i32) -> Result<Option<ImageEntity>>;
    async fn create(&self, insert_entity: InsertImageEntity) -> Result<ImageEntity>;
    async fn update(
        &self,
        image_id: i32,
        update_entity: UpdateImageEntity,
    ) -> Result<Option<ImageEntity>>;
    async fn delete(&self, image_id: i32) -> Result<Option<ImageEntity>>;
}
