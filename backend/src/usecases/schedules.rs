use anyhow::Result;
use crates::domain::{
    repositories::schedules::ScheduleRepository,
    value_objects::schedules::{ScheduleFieldsModel, ScheduleModel},
};
use std::sync::Arc;
use tracing::debug;

pub struct ScheduleUseCase<T>
where
    T: ScheduleRepository + Send + Sync + 'static,
{
    schedule_repository: Arc<T>,
}

impl<T> ScheduleUseCase<T>
where
    T: ScheduleRepository + Send + Sync + 'static,
{
    pub fn new(schedule_repository: Arc<T>) -> Self {
        Self {
            schedule_repository,
        }
    }

    pub async fn list(&self) -> Result<Vec<ScheduleModel>> {
        let schedules = self.schedule_repository.list().await?;
        debug!(count = schedules.len(), "schedules: listed");

        Ok(schedules.into_iter().map(ScheduleModel::from).collect())
    }

    pub async fn find_by_id(&self, schedule_id: i32) -> Result<Option<ScheduleModel>> {
        let schedule = self.schedule_repository.find_by_id(schedule_id).await?;

        Ok(schedule.map(ScheduleModel::from))
    }

    pub async fn create(&self, fields: ScheduleFieldsModel) -> Result<ScheduleModel> {
        let schedule = self
            .schedule_repository
            .create(fields.to_insert_entity())
            .await?;
        debug!(schedule_id = schedule.id, "schedules: created");

        Ok(schedule.into())
    }

    pub async fn update(
        &self,
        schedule_id: i32,
        fields: ScheduleFieldsModel,
    ) -> Result<Option<ScheduleModel>> {
        let schedule = self
            .schedule_repository
            .update(schedule_id, fields.to_update_entity())
            .await?;

        Ok(schedule.map(ScheduleModel::from))
    }

    /// `false` when no schedule had `schedule_id`.
    pub async fn delete(&self, schedule_id: i32) -> Result<bool> {
        let removed = self.schedule_repository.delete(schedule_id).await?;
        debug!(schedule_id, removed = removed.is_some(), "schedules: delete executed");

        Ok(removed.is_some())
    }
}
