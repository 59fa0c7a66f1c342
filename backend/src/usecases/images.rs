use anyhow::Result;
use crates::domain::{
    repositories::images::ImageRepository,
    value_objects::images::{ImageFieldsModel, ImageModel},
};
use std::sync::Arc;
use tracing::debug;

pub struct ImageUseCase<T>
where
    T: ImageRepository + Send + Sync + 'static,
{
    image_repository: Arc<T>,
}

impl<T> ImageUseCase<T>
where
    T: ImageRepository + Send + Sync + 'static,
{
    pub fn new(image_repository: Arc<T>) -> Self {
        Self { image_repository }
    }

    pub async fn list(&self) -> Result<Vec<ImageModel>> {
        let images = self.image_repository.list().await?;
        debug!(count = images.len(), "images: listed");

        Ok(images.into_iter().map(ImageModel::from).collect())
    }

    pub async fn find_by_id(&self, image_id: i32) -> Result<Option<ImageModel>> {
        Ok(self
            .image_repository
            .find_by_id(image_id)
            .await?
            .map(ImageModel::from))
    }

    pub async fn create(&self, fields: ImageFieldsModel) -> Result<ImageModel> {
        let image = self
            .image_repository
            .create(fields.to_insert_entity())
            .await?;
        debug!(image_id = image.id, "images: created");

        Ok(image.into())
    }

    pub async fn update(&self, image_id: i32, fields: ImageFieldsModel) -> Result<Option<ImageModel>> {
        Ok(self
            .image_repository
            .update(image_id, fields.to_update_entity())
            .await?
            .map(ImageModel::from))
    }

    pub async fn delete(&self, image_id: i32) -> Result<bool> {
        let removed = self.image_repository.delete(image_id).await?;
        debug!(image_id, removed = removed.is_some(), "images: delete executed");

        Ok(removed.is_some())
    }
}
