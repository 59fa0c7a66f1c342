use serde::{Deserialize, Serialize};

use crate::domain::entities::images::{ImageEntity, InsertImageEntity, UpdateImageEntity};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ImageModel {
    pub id: i32,
    pub url: String,
}

impl From<ImageEntity> for ImageModel {
    fn from(value: ImageEntity) -> Self {
        Self {
            id: value.id,
            url: value.url,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ImageFieldsModel {
    pub url: String,
}

impl ImageFieldsModel {
    pub fn to_insert_entity(&self) -> InsertImageEntity {
        InsertImageEntity {
            url: self.url.clone(),
        }
    }

    pub fn to_update_entity(&self) -> UpdateImageEntity {
        UpdateImageEntity {
            url: self.url.clone(),
        }
    }
}
