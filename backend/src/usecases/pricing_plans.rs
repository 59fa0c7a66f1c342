use anyhow::Result;
use crates::domain::{
    repositories::pricing_plans::PricingPlanRepository,
    value_objects::pricing_plans::{PricingPlanFieldsModel, PricingPlanModel},
};
use std::sync::Arc;
use tracing::debug;

/// Pricing plans only support list, create and update.
pub struct PricingPlanUseCase<T>
where
    T: PricingPlanRepository + Send + Sync + 'static,
{
    pricing_plan_repository: Arc<T>,
}

impl<T> PricingPlanUseCase<T>
where
    T: PricingPlanRepository + Send + Sync + 'static,
{
    pub fn new(pricing_plan_repository: Arc<T>) -> Self {
        Self {
            pricing_plan_repository,
        }
    }

    pub async fn list(&self) -> Result<Vec<PricingPlanModel>> {
        let plans = self.pricing_plan_repository.list().await?;
        debug!(count = plans.len(), "pricing: listed");

        Ok(plans.into_iter().map(PricingPlanModel::from).collect())
    }

    pub async fn create(&self, fields: PricingPlanFieldsModel) -> Result<PricingPlanModel> {
        let plan = self
            .pricing_plan_repository
            .create(fields.to_insert_entity())
            .await?;
        debug!(plan_id = plan.id, "pricing: created");

        Ok(plan.into())
    }

    pub async fn update(
        &self,
        plan_id: i32,
        fields: PricingPlanFieldsModel,
    ) -> Result<Option<PricingPlanModel>> {
        Ok(self
            .pricing_plan_repository
            .update(plan_id, fields.to_update_entity())
            .await?
            .map(PricingPlanModel::from))
    }
}
