pub mod images;
pub mod pricing_plans;
pub mod schedules;

use axum::{Json, extract::rejection::JsonRejection};

use super::error_responses::AppError;

/// Ids are Postgres `serial`s. Anything that is not an `i32` cannot name a stored row.
pub(crate) fn parse_record_id(raw_id: &str) -> Option<i32> {
    raw_id.trim().parse().ok()
}

pub(crate) fn decode_body<T>(body: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    body.map(|Json(value)| value)
        .map_err(|rejection| AppError::BadRequest(rejection.body_text()))
}
