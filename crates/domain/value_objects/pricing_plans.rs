use serde::{Deserialize, Deserializer, Serialize, de::Error as _};

use crate::domain::entities::pricing_plans::{
    InsertPricingPlanEntity, PricingPlanEntity, UpdatePricingPlanEntity,
};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PricingPlanModel {
    pub id: i32,
    pub precio: f64,
    pub nombre_plan: String,
    pub features: serde_json::Value,
}

impl From<PricingPlanEntity> for PricingPlanModel {
    fn from(value: PricingPlanEntity) -> Self {
        Self {
            id: value.id,
            precio: value.precio,
            nombre_plan: value.nombre_plan,
            features: value.features,
        }
    }
}

/// Body of both create and update: every non-id column, all required.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PricingPlanFieldsModel {
    pub precio: f64,
    pub nombre_plan: String,
    #[serde(deserialize_with = "non_null_features")]
    pub features: serde_json::Value,
}

/// `features` is free-form JSON but still required, so `null` counts as absent.
fn non_null_features<'de, D>(deserializer: D) -> Result<serde_json::Value, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Null => Err(D::Error::custom("features must not be null")),
        features => Ok(features),
    }
}

impl PricingPlanFieldsModel {
    pub fn to_insert_entity(&self) -> InsertPricingPlanEntity {
        InsertPricingPlanEntity {
            precio: self.precio,
            nombre_plan: self.nombre_plan.clone(),
            features: self.features.clone(),
        }
    }

    pub fn to_update_entity(&self) -> UpdatePricingPlanEntity {
        UpdatePricingPlanEntity {
            precio: self.precio,
            nombre_plan: self.nombre_plan.clone(),
            features: self.features.clone(),
        }
    }
}
