use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    routing::get,
};
use crates::{
    domain::{
        repositories::schedules::ScheduleRepository,
        value_objects::schedules::{ScheduleFieldsModel, ScheduleModel},
    },
    infra::db::{
        postgres::postgres_connection::PgPoolSquad, repositories::schedules::SchedulePostgres,
    },
};
use tracing::{error, info};

use super::{decode_body, parse_record_id};
use crate::{
    axum_http::{
        default_routers,
        error_responses::{AppError, MessageResponse},
    },
    usecases::schedules::ScheduleUseCase,
};

const NOT_FOUND: &str = "Horario no encontrado";

pub fn routes(db_pool: Arc<PgPoolSquad>) -> Router {
    let schedule_repository = SchedulePostgres::new(Arc::clone(&db_pool));
    let schedule_usecase = ScheduleUseCase::new(Arc::new(schedule_repository));

    router(Arc::new(schedule_usecase))
}

pub fn router<T>(schedule_usecase: Arc<ScheduleUseCase<T>>) -> Router
where
    T: ScheduleRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(list::<T>).post(create::<T>))
        .route(
            "/:id",
            get(find_by_id::<T>).put(update::<T>).delete(delete::<T>),
        )
        .method_not_allowed_fallback(default_routers::method_not_allowed)
        .with_state(schedule_usecase)
}

pub async fn list<T>(
    State(schedule_usecase): State<Arc<ScheduleUseCase<T>>>,
) -> Result<Json<Vec<ScheduleModel>>, AppError>
where
    T: ScheduleRepository + Send + Sync + 'static,
{
    info!("schedules: list request received");
    match schedule_usecase.list().await {
        Ok(schedules) => Ok(Json(schedules)),
        Err(err) => {
            error!(error = ?err, "schedules: failed to list schedules");
            Err(AppError::StoreFailure("Error obteniendo horarios"))
        }
    }
}

pub async fn find_by_id<T>(
    State(schedule_usecase): State<Arc<ScheduleUseCase<T>>>,
    Path(raw_id): Path<String>,
) -> Result<Json<ScheduleModel>, AppError>
where
    T: ScheduleRepository + Send + Sync + 'static,
{
    info!(schedule_id = %raw_id, "schedules: get request received");
    let schedule_id = parse_record_id(&raw_id).ok_or(AppError::NotFound(NOT_FOUND))?;

    match schedule_usecase.find_by_id(schedule_id).await {
        Ok(Some(schedule)) => Ok(Json(schedule)),
        Ok(None) => Err(AppError::NotFound(NOT_FOUND)),
        Err(err) => {
            error!(schedule_id, error = ?err, "schedules: failed to load schedule");
            Err(AppError::StoreFailure("Error obteniendo horario por ID"))
        }
    }
}

pub async fn create<T>(
    State(schedule_usecase): State<Arc<ScheduleUseCase<T>>>,
    body: Result<Json<ScheduleFieldsModel>, JsonRejection>,
) -> Result<(StatusCode, Json<ScheduleModel>), AppError>
where
    T: ScheduleRepository + Send + Sync + 'static,
{
    info!("schedules: create request received");
    let fields = decode_body(body)?;

    match schedule_usecase.create(fields).await {
        Ok(schedule) => Ok((StatusCode::CREATED, Json(schedule))),
        Err(err) => {
            error!(error = ?err, "schedules: failed to create schedule");
            Err(AppError::StoreFailure("Error creando horario"))
        }
    }
}

pub async fn update<T>(
    State(schedule_usecase): State<Arc<ScheduleUseCase<T>>>,
    Path(raw_id): Path<String>,
    body: Result<Json<ScheduleFieldsModel>, JsonRejection>,
) -> Result<Json<ScheduleModel>, AppError>
where
    T: ScheduleRepository + Send + Sync + 'static,
{
    info!(schedule_id = %raw_id, "schedules: update request received");
    let fields = decode_body(body)?;
    let schedule_id = parse_record_id(&raw_id).ok_or(AppError::NotFound(NOT_FOUND))?;

    match schedule_usecase.update(schedule_id, fields).await {
        Ok(Some(schedule)) => Ok(Json(schedule)),
        Ok(None) => Err(AppError::NotFound(NOT_FOUND)),
        Err(err) => {
            error!(schedule_id, error = ?err, "schedules: failed to update schedule");
            Err(AppError::StoreFailure("Error actualizando horario"))
        }
    }
}

pub async fn delete<T>(
    State(schedule_usecase): State<Arc<ScheduleUseCase<T>>>,
    Path(raw_id): Path<String>,
) -> Result<Json<MessageResponse>, AppError>
where
    T: ScheduleRepository + Send + Sync + 'static,
{
    info!(schedule_id = %raw_id, "schedules: delete request received");
    let schedule_id = parse_record_id(&raw_id).ok_or(AppError::NotFound(NOT_FOUND))?;

    match schedule_usecase.delete(schedule_id).await {
        Ok(true) => Ok(Json(MessageResponse::new("Horario eliminado correctamente"))),
        Ok(false) => Err(AppError::NotFound(NOT_FOUND)),
        Err(err) => {
            error!(schedule_id, error = ?err, "schedules: failed to delete schedule");
            Err(AppError::StoreFailure("Error eliminando horario"))
        }
    }
}
