use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;

use crate::domain::entities::pricing_plans::{
    InsertPricingPlanEntity, PricingPlanEntity, UpdatePricingPlanEntity,
};

#[async_trait]
#[automock]
pub trait PricingPlanRepository {
    async fn list(&self) -> Result<Vec<PricingPlanEntity>>;
    async fn create(&self, insert_entity: InsertPricingPlanEntity) -> Result<PricingPlanEntity>;
    /// `None` when no row has `plan_id`.
    async fn update(
        &self,
        plan_id: i32,
        update_entity: UpdatePricingPlanEntity,
    ) -> Result<Option<PricingPlanEntity>>;
}
