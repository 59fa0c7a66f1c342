use crate::{
    axum_http::{default_routers, routers},
    config::config_model::DotEnvyConfig,
};
use anyhow::Result;
use axum::{
    Router,
    http::{Method, StatusCode, header::CONTENT_TYPE},
    routing::get,
};
use crates::infra::db::postgres::postgres_connection::PgPoolSquad;
use std::{net::SocketAddr, sync::Arc, time::Duration};
use tokio::net::TcpListener;
use tower_http::{
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::{error, info};

pub fn resource_routes(db_pool: Arc<PgPoolSquad>) -> Router {
    mount_resources(
        routers::pricing_plans::routes(Arc::clone(&db_pool)),
        routers::schedules::routes(Arc::clone(&db_pool)),
        routers::images::routes(Arc::clone(&db_pool)),
    )
}

/// Mounts each resource under its English path and its Spanish alias, plus the default routes.
pub fn mount_resources(pricing: Router, schedules: Router, images: Router) -> Router {
    Router::new()
        .nest("/pricing", pricing.clone())
        .nest("/precios", pricing)
        .nest("/schedules", schedules.clone())
        .nest("/horarios", schedules)
        .nest("/images", images.clone())
        .nest("/imagenes", images)
        .route("/health-check", get(default_routers::health_check))
        .fallback(default_routers::not_found)
}

pub async fn start(config: Arc<DotEnvyConfig>, db_pool: Arc<PgPoolSquad>) -> Result<()> {
    // Timeouts answer with an empty 408 body; everything else is JSON.
    let app = resource_routes(db_pool)
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(config.backend_server.timeout),
        ))
        .layer(RequestBodyLimitLayer::new(
            (config.backend_server.body_limit * 1024 * 1024).try_into()?,
        ))
        .layer(
            CorsLayer::new()
                .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
                .allow_headers([CONTENT_TYPE])
                .allow_origin(Any),
        )
        .layer(TraceLayer::new_for_http());

    let addr = SocketAddr::from(([0, 0, 0, 0], config.backend_server.port));
    let listener = TcpListener::bind(addr).await?;

    info!(
        port = config.backend_server.port,
        stage = %config.stage,
        "Server is running"
    );
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server has stopped accepting requests");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            error!(error = ?err, "Failed to install CTRL+C signal handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                error!(error = ?err, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received ctrl+C signal"),
        _ = terminate => info!("Received terminate signal"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        axum_http::routers::{self, test_support::send},
        usecases::{
            images::ImageUseCase, pricing_plans::PricingPlanUseCase, schedules::ScheduleUseCase,
        },
    };
    use anyhow::anyhow;
    use crates::domain::{
        entities::{images::ImageEntity, schedules::ScheduleEntity},
        repositories::{
            images::MockImageRepository, pricing_plans::MockPricingPlanRepository,
            schedules::MockScheduleRepository,
        },
    };
    use serde_json::{Value, json};
    use tower::ServiceExt;

    fn mounted(
        pricing: MockPricingPlanRepository,
        schedules: MockScheduleRepository,
        images: MockImageRepository,
    ) -> Router {
        mount_resources(
            routers::pricing_plans::router(Arc::new(PricingPlanUseCase::new(Arc::new(pricing)))),
            routers::schedules::router(Arc::new(ScheduleUseCase::new(Arc::new(schedules)))),
            routers::images::router(Arc::new(ImageUseCase::new(Arc::new(images)))),
        )
    }

    /// Every repository call fails as if the database were unreachable.
    fn unreachable_store() -> Router {
        let mut pricing = MockPricingPlanRepository::new();
        pricing
            .expect_list()
            .returning(|| Box::pin(async { Err(anyhow!("connection refused")) }));
        pricing
            .expect_create()
            .returning(|_| Box::pin(async { Err(anyhow!("connection refused")) }));
        pricing
            .expect_update()
            .returning(|_, _| Box::pin(async { Err(anyhow!("connection refused")) }));

        let mut schedules = MockScheduleRepository::new();
        schedules
            .expect_list()
            .returning(|| Box::pin(async { Err(anyhow!("connection refused")) }));
        schedules
            .expect_find_by_id()
            .returning(|_| Box::pin(async { Err(anyhow!("connection refused")) }));
        schedules
            .expect_create()
            .returning(|_| Box::pin(async { Err(anyhow!("connection refused")) }));
        schedules
            .expect_update()
            .returning(|_, _| Box::pin(async { Err(anyhow!("connection refused")) }));
        schedules
            .expect_delete()
            .returning(|_| Box::pin(async { Err(anyhow!("connection refused")) }));

        let mut images = MockImageRepository::new();
        images
            .expect_list()
            .returning(|| Box::pin(async { Err(anyhow!("connection refused")) }));
        images
            .expect_find_by_id()
            .returning(|_| Box::pin(async { Err(anyhow!("connection refused")) }));
        images
            .expect_create()
            .returning(|_| Box::pin(async { Err(anyhow!("connection refused")) }));
        images
            .expect_update()
            .returning(|_, _| Box::pin(async { Err(anyhow!("connection refused")) }));
        images
            .expect_delete()
            .returning(|_| Box::pin(async { Err(anyhow!("connection refused")) }));

        mounted(pricing, schedules, images)
    }

    #[tokio::test]
    async fn every_store_failure_has_its_own_message_on_both_paths() {
        let app = unreachable_store();
        let plan = json!({"precio": 10, "nombre_plan": "Mensual", "features": []});
        let schedule = json!({"nombre_clase": "Yoga", "tiempo": "18:00", "encargado": "Ana"});
        let image = json!({"url": "https://cdn.example.com/a.png"});

        let cases: Vec<(Method, &str, &str, Option<Value>, &str)> = vec![
            (Method::GET, "/pricing", "/precios", None, "Error obteniendo precios"),
            (Method::POST, "/pricing", "/precios", Some(plan.clone()), "Error creando precio"),
            (Method::PUT, "/pricing/1", "/precios/1", Some(plan), "Error actualizando precio"),
            (Method::GET, "/schedules", "/horarios", None, "Error obteniendo horarios"),
            (
                Method::GET,
                "/schedules/1",
                "/horarios/1",
                None,
                "Error obteniendo horario por ID",
            ),
            (
                Method::POST,
                "/schedules",
                "/horarios",
                Some(schedule.clone()),
                "Error creando horario",
            ),
            (
                Method::PUT,
                "/schedules/1",
                "/horarios/1",
                Some(schedule),
                "Error actualizando horario",
            ),
            (Method::DELETE, "/schedules/1", "/horarios/1", None, "Error eliminando horario"),
            (Method::GET, "/images", "/imagenes", None, "Error obteniendo imágenes"),
            (
                Method::GET,
                "/images/1",
                "/imagenes/1",
                None,
                "Error obteniendo imagen por ID",
            ),
            (Method::POST, "/images", "/imagenes", Some(image.clone()), "Error creando imagen"),
            (
                Method::PUT,
                "/images/1",
                "/imagenes/1",
                Some(image),
                "Error actualizando imagen",
            ),
            (Method::DELETE, "/images/1", "/imagenes/1", None, "Error eliminando imagen"),
        ];

        for (method, english, spanish, body, message) in cases {
            for uri in [english, spanish] {
                let (status, response) = send(app.clone(), method.clone(), uri, body.clone()).await;

                assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{} {}", method, uri);
                assert_eq!(response, json!({"error": message}), "{} {}", method, uri);
            }
        }
    }

    #[tokio::test]
    async fn aliases_reach_the_same_records() {
        let mut schedules = MockScheduleRepository::new();
        schedules
            .expect_find_by_id()
            .with(mockall::predicate::eq(1))
            .times(2)
            .returning(|id| {
                Box::pin(async move {
                    Ok(Some(ScheduleEntity {
                        id,
                        nombre_clase: "Yoga".to_string(),
                        tiempo: "18:00".to_string(),
                        encargado: "Ana".to_string(),
                    }))
                })
            });
        let mut images = MockImageRepository::new();
        images.expect_list().times(2).returning(|| {
            Box::pin(async {
                Ok(vec![ImageEntity {
                    id: 3,
                    url: "https://cdn.example.com/c.png".to_string(),
                }])
            })
        });
        let mut pricing = MockPricingPlanRepository::new();
        pricing
            .expect_list()
            .times(2)
            .returning(|| Box::pin(async { Ok(vec![]) }));
        let app = mounted(pricing, schedules, images);

        let yoga = json!({"id": 1, "nombre_clase": "Yoga", "tiempo": "18:00", "encargado": "Ana"});
        for uri in ["/schedules/1", "/horarios/1"] {
            let (status, body) = send(app.clone(), Method::GET, uri, None).await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(body, yoga);
        }

        for uri in ["/images", "/imagenes"] {
            let (status, body) = send(app.clone(), Method::GET, uri, None).await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(body, json!([{"id": 3, "url": "https://cdn.example.com/c.png"}]));
        }

        for uri in ["/pricing", "/precios"] {
            let (status, body) = send(app.clone(), Method::GET, uri, None).await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(body, json!([]));
        }

        let (status, body) = send(app, Method::GET, "/horarios/abc", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"error": "Horario no encontrado"}));
    }

    #[tokio::test]
    async fn health_check_answers_ok() {
        let app = mounted(
            MockPricingPlanRepository::new(),
            MockScheduleRepository::new(),
            MockImageRepository::new(),
        );

        let response = app
            .oneshot(
                axum::http::Request::builder()
                    .uri("/health-check")
                    .body(axum::body::Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&bytes[..], b"OK");
    }

    #[tokio::test]
    async fn unknown_route_answers_json_not_found() {
        let app = mounted(
            MockPricingPlanRepository::new(),
            MockScheduleRepository::new(),
            MockImageRepository::new(),
        );

        let (status, body) = send(app, Method::GET, "/socios", None).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"error": "Ruta no encontrada"}));
    }

    #[tokio::test]
    async fn unsupported_method_answers_json_405() {
        let app = mounted(
            MockPricingPlanRepository::new(),
            MockScheduleRepository::new(),
            MockImageRepository::new(),
        );

        let (status, body) = send(app, Method::PATCH, "/imagenes/1", None).await;

        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(body, json!({"error": "Método no permitido"}));
    }
}
