use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    routing::{get, put},
};
use crates::{
    domain::{
        repositories::pricing_plans::PricingPlanRepository,
        value_objects::pricing_plans::{PricingPlanFieldsModel, PricingPlanModel},
    },
    infra::db::{
        postgres::postgres_connection::PgPoolSquad,
        repositories::pricing_plans::PricingPlanPostgres,
    },
};
use tracing::{error, info};

use super::{decode_body, parse_record_id};
use crate::{
    axum_http::{default_routers, error_responses::AppError},
    usecases::pricing_plans::PricingPlanUseCase,
};

const NOT_FOUND: &str = "Precio no encontrado";

pub fn routes(db_pool: Arc<PgPoolSquad>) -> Router {
    let pricing_plan_repository = PricingPlanPostgres::new(Arc::clone(&db_pool));
    let pricing_plan_usecase = PricingPlanUseCase::new(Arc::new(pricing_plan_repository));

    router(Arc::new(pricing_plan_usecase))
}

// No get-by-id and no delete for pricing plans; `/:id` only accepts PUT.
pub fn router<T>(pricing_plan_usecase: Arc<PricingPlanUseCase<T>>) -> Router
where
    T: PricingPlanRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(list::<T>).post(create::<T>))
        .route("/:id", put(update::<T>))
        .method_not_allowed_fallback(default_routers::method_not_allowed)
        .with_state(pricing_plan_usecase)
}

pub async fn list<T>(
    State(pricing_plan_usecase): State<Arc<PricingPlanUseCase<T>>>,
) -> Result<Json<Vec<PricingPlanModel>>, AppError>
where
    T: PricingPlanRepository + Send + Sync + 'static,
{
    info!("pricing: list request received");
    match pricing_plan_usecase.list().await {
        Ok(plans) => Ok(Json(plans)),
        Err(err) => {
            error!(error = ?err, "pricing: failed to list pricing plans");
            Err(AppError::StoreFailure("Error obteniendo precios"))
        }
    }
}

pub async fn create<T>(
    State(pricing_plan_usecase): State<Arc<PricingPlanUseCase<T>>>,
    body: Result<Json<PricingPlanFieldsModel>, JsonRejection>,
) -> Result<(StatusCode, Json<PricingPlanModel>), AppError>
where
    T: PricingPlanRepository + Send + Sync + 'static,
{
    info!("pricing: create request received");
    let fields = decode_body(body)?;

    match pricing_plan_usecase.create(fields).await {
        Ok(plan) => Ok((StatusCode::CREATED, Json(plan))),
        Err(err) => {
            error!(error = ?err, "pricing: failed to create pricing plan");
            Err(AppError::StoreFailure("Error creando precio"))
        }
    }
}

pub async fn update<T>(
    State(pricing_plan_usecase): State<Arc<PricingPlanUseCase<T>>>,
    Path(raw_id): Path<String>,
    body: Result<Json<PricingPlanFieldsModel>, JsonRejection>,
) -> Result<Json<PricingPlanModel>, AppError>
where
    T: PricingPlanRepository + Send + Sync + 'static,
{
    info!(plan_id = %raw_id, "pricing: update request received");
    let fields = decode_body(body)?;
    let plan_id = parse_record_id(&raw_id).ok_or(AppError::NotFound(NOT_FOUND))?;

    match pricing_plan_usecase.update(plan_id, fields).await {
        Ok(Some(plan)) => Ok(Json(plan)),
        Ok(None) => Err(AppError::NotFound(NOT_FOUND)),
        Err(err) => {
            error!(plan_id, error = ?err, "pricing: failed to update pricing plan");
            Err(AppError::StoreFailure("Error actualizando precio"))
        }
    }
}
