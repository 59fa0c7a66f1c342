use diesel::prelude::*;

use crate::infra::db::postgres::schema::precios;

/// Raw row of `precios`. Features stay as free-form JSON.
#[derive(Debug, Clone, PartialEq, Identifiable, Selectable, Queryable)]
#[diesel(table_name = precios)]
pub struct PricingPlanEntity {
    pub id: i32,
    pub precio: f64,
    pub nombre_plan: String,
    pub features: serde_json::Value,
}

#[derive(Debug, Clone, PartialEq, Insertable)]
#[diesel(table_name = precios)]
pub struct InsertPricingPlanEntity {
    pub precio: f64,
    pub nombre_plan: String,
    pub features: serde_json::Value,
}

#[derive(Debug, Clone, PartialEq, AsChangeset)]
#[diesel(table_name = precios)]
pub struct UpdatePricingPlanEntity {
    pub precio: f64,
    pub nombre_plan: String,
    pub features: serde_json::Value,
}
