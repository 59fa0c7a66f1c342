use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;

use crate::domain::entities::schedules::{
    InsertScheduleEntity, ScheduleEntity, UpdateScheduleEntity,
};

#[async_trait]
#[automock]
pub trait ScheduleRepository {
    async fn list(&self) -> Result<Vec<ScheduleEntity>>;
    async fn find_by_id(&self, schedule_id: i32) -> Result<Option<ScheduleEntity>>;
    async fn create(&self, insert_entity: InsertScheduleEntity) -> Result<ScheduleEntity>;
    async fn update(
        &self,
        schedule_id: i32,
        update_entity: UpdateScheduleEntity,
    ) -> Result<Option<ScheduleEntity>>;
    /// Returns the removed row, or `None` when nothing matched.
    async fn delete(&self, schedule_id: i32) -> Result<Option<ScheduleEntity>>;
}
