use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    routing::get,
};
use crates::{
    domain::{
        repositories::images::ImageRepository,
        value_objects::images::{ImageFieldsModel, ImageModel},
    },
    infra::db::{postgres::postgres_connection::PgPoolSquad, repositories::images::ImagePostgres},
};
use tracing::{error, info};

use super::{decode_body, parse_record_id};
use crate::{
    axum_http::{
        default_routers,
        error_responses::{AppError, MessageResponse},
    },
    usecases::images::ImageUseCase,
};

const NOT_FOUND: &str = "Imagen no encontrada";

pub fn routes(db_pool: Arc<PgPoolSquad>) -> Router {
    let image_repository = ImagePostgres::new(Arc::clone(&db_pool));
    let image_usecase = ImageUseCase::new(Arc::new(image_repository));

    router(Arc::new(image_usecase))
}

pub fn router<T>(image_usecase: Arc<ImageUseCase<T>>) -> Router
where
    T: ImageRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(list::<T>).post(create::<T>))
        .route(
            "/:id",
            get(find_by_id::<T>).put(update::<T>).delete(delete::<T>),
        )
        .method_not_allowed_fallback(default_routers::method_not_allowed)
        .with_state(image_usecase)
}

pub async fn list<T>(
    State(image_usecase): State<Arc<ImageUseCase<T>>>,
) -> Result<Json<Vec<ImageModel>>, AppError>
where
    T: ImageRepository + Send + Sync + 'static,
{
    info!("images: list request received");
    image_usecase.list().await.map(Json).map_err(|err| {
        error!(error = ?err, "images: failed to list images");
        AppError::StoreFailure("Error obteniendo imágenes")
    })
}

pub async fn find_by_id<T>(
    State(image_usecase): State<Arc<ImageUseCase<T>>>,
    Path(raw_id): Path<String>,
) -> Result<Json<ImageModel>, AppError>
where
    T: ImageRepository + Send + Sync + 'static,
{
    info!(image_id = %raw_id, "images: get request received");
    let image_id = parse_record_id(&raw_id).ok_or(AppError::NotFound(NOT_FOUND))?;

    match image_usecase.find_by_id(image_id).await {
        Ok(Some(image)) => Ok(Json(image)),
        Ok(None) => Err(AppError::NotFound(NOT_FOUND)),
        Err(err) => {
            error!(image_id, error = ?err, "images: failed to load image");
            Err(AppError::StoreFailure("Error obteniendo imagen por ID"))
        }
    }
}

pub async fn create<T>(
    State(image_usecase): State<Arc<ImageUseCase<T>>>,
    body: Result<Json<ImageFieldsModel>, JsonRejection>,
) -> Result<(StatusCode, Json<ImageModel>), AppError>
where
    T: ImageRepository + Send + Sync + 'static,
{
    info!("images: create request received");
    let fields = decode_body(body)?;

    match image_usecase.create(fields).await {
        Ok(image) => Ok((StatusCode::CREATED, Json(image))),
        Err(err) => {
            error!(error = ?err, "images: failed to create image");
            Err(AppError::StoreFailure("Error creando imagen"))
        }
    }
}

pub async fn update<T>(
    State(image_usecase): State<Arc<ImageUseCase<T>>>,
    Path(raw_id): Path<String>,
    body: Result<Json<ImageFieldsModel>, JsonRejection>,
) -> Result<Json<ImageModel>, AppError>
where
    T: ImageRepository + Send + Sync + 'static,
{
    info!(image_id = %raw_id, "images: update request received");
    let fields = decode_body(body)?;
    let image_id = parse_record_id(&raw_id).ok_or(AppError::NotFound(NOT_FOUND))?;

    match image_usecase.update(image_id, fields).await {
        Ok(Some(image)) => Ok(Json(image)),
        Ok(None) => Err(AppError::NotFound(NOT_FOUND)),
        Err(err) => {
            error!(image_id, error = ?err, "images: failed to update image");
            Err(AppError::StoreFailure("Error actualizando imagen"))
        }
    }
}

pub async fn delete<T>(
    State(image_usecase): State<Arc<ImageUseCase<T>>>,
    Path(raw_id): Path<String>,
) -> Result<Json<MessageResponse>, AppError>
where
    T: ImageRepository + Send + Sync + 'static,
{
    info!(image_id = %raw_id, "images: delete request received");
    let image_id = parse_record_id(&raw_id).ok_or(AppError::NotFound(NOT_FOUND))?;

    match image_usecase.delete(image_id).await {
        Ok(true) => Ok(Json(MessageResponse::new("Imagen eliminada correctamente"))),
        Ok(false) => Err(AppError::NotFound(NOT_FOUND)),
        Err(err) => {
            error!(image_id, error = ?err, "images: failed to delete image");
            Err(AppError::StoreFailure("Error eliminando imagen"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::axum_http::routers::test_support::send;
    use axum::http::Method;
    use crates::domain::{
        entities::images::{ImageEntity, UpdateImageEntity},
        repositories::images::MockImageRepository,
    };
    use mockall::predicate::eq;
    use serde_json::json;

    fn app(repo: MockImageRepository) -> Router {
        router(Arc::new(ImageUseCase::new(Arc::new(repo))))
    }

    #[tokio::test]
    async fn list_and_get_answer_stored_rows() {
        let mut repo = MockImageRepository::new();
        repo.expect_list().returning(|| {
            Box::pin(async {
                Ok(vec![
                    ImageEntity {
                        id: 1,
                        url: "https://cdn.example.com/a.png".to_string(),
                    },
                    ImageEntity {
                        id: 2,
                        url: "https://cdn.example.com/b.png".to_string(),
                    },
                ])
            })
        });
        repo.expect_find_by_id().with(eq(2)).returning(|id| {
            Box::pin(async move {
                Ok(Some(ImageEntity {
                    id,
                    url: "https://cdn.example.com/b.png".to_string(),
                }))
            })
        });
        let app = app(repo);

        let (status, body) = send(app.clone(), Method::GET, "/", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!([
                {"id": 1, "url": "https://cdn.example.com/a.png"},
                {"id": 2, "url": "https://cdn.example.com/b.png"}
            ])
        );

        let (status, body) = send(app, Method::GET, "/2", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"id": 2, "url": "https://cdn.example.com/b.png"}));
    }

    #[tokio::test]
    async fn update_of_unknown_image_is_not_found() {
        let mut repo = MockImageRepository::new();
        repo.expect_update()
            .with(
                eq(999),
                eq(UpdateImageEntity {
                    url: "x".to_string(),
                }),
            )
            .times(1)
            .returning(|_, _| Box::pin(async { Ok(None) }));

        let (status, body) = send(app(repo), Method::PUT, "/999", Some(json!({"url": "x"}))).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"error": "Imagen no encontrada"}));
    }

    #[tokio::test]
    async fn update_returns_replaced_row() {
        let mut repo = MockImageRepository::new();
        repo.expect_update().returning(|id, entity| {
            Box::pin(async move { Ok(Some(ImageEntity { id, url: entity.url })) })
        });

        let (status, body) = send(
            app(repo),
            Method::PUT,
            "/3",
            Some(json!({"url": "https://cdn.example.com/new.jpg"})),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"id": 3, "url": "https://cdn.example.com/new.jpg"}));
    }

    #[tokio::test]
    async fn create_answers_created_with_generated_id() {
        let mut repo = MockImageRepository::new();
        repo.expect_create().returning(|entity| {
            Box::pin(async move { Ok(ImageEntity { id: 12, url: entity.url }) })
        });

        let (status, body) = send(
            app(repo),
            Method::POST,
            "/",
            Some(json!({"url": "https://cdn.example.com/hero.png"})),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body, json!({"id": 12, "url": "https://cdn.example.com/hero.png"}));
    }

    #[tokio::test]
    async fn delete_twice_is_ok_then_not_found() {
        let mut repo = MockImageRepository::new();
        let mut deleted = false;
        repo.expect_delete().with(eq(8)).times(2).returning(move |id| {
            let removed = (!deleted).then(|| ImageEntity {
                id,
                url: "https://cdn.example.com/old.png".to_string(),
            });
            deleted = true;
            Box::pin(async move { Ok(removed) })
        });
        let app = app(repo);

        let (status, body) = send(app.clone(), Method::DELETE, "/8", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"message": "Imagen eliminada correctamente"}));

        let (status, body) = send(app, Method::DELETE, "/8", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"error": "Imagen no encontrada"}));
    }

    #[tokio::test]
    async fn url_of_wrong_type_is_bad_request() {
        let repo = MockImageRepository::new();

        let (status, body) = send(app(repo), Method::POST, "/", Some(json!({"url": 42}))).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());
    }
}
