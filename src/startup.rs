use crate::configuration::Settings;
use crate::connectors;
use crate::db::PgReviewStore;
use crate::helpers::JsonResponse;
use crate::routes;
use crate::services::ReviewService;
use actix_cors::Cors;
use actix_web::{dev::Server, error, web, App, HttpServer};
use sqlx::{Pool, Postgres};
use std::net::TcpListener;
use std::sync::Arc;
use tracing_actix_web::TracingLogger;

pub async fn run(
    listener: TcpListener,
    pg_pool: Pool<Postgres>,
    settings: Settings,
) -> Result<Server, std::io::Error> {
    let users = connectors::init_user_service(&settings.connectors)
        .map_err(|err| std::io::Error::new(std::io::ErrorKind::Other, err))?;
    let store = Arc::new(PgReviewStore::new(pg_pool));
    let review_service = web::Data::new(ReviewService::new(store, users));

    let json_config = json_config();
    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(Cors::permissive())
            .app_data(json_config.clone())
            .app_data(review_service.clone())
            .configure(configure_routes)
    })
    .listen(listener)?
    .run();

    Ok(server)
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/health_check").service(routes::health_check))
        .service(
            web::scope("/api/reviews")
                .service(routes::review::add_handler)
                .service(routes::review::product_list_handler)
                .service(routes::review::user_list_handler)
                .service(routes::review::item_handler)
                .service(routes::review::update_handler)
                .service(routes::review::delete_handler),
        );
}

/// Malformed bodies answer 400 with the position of the problem
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let message = match &err {
            error::JsonPayloadError::Deserialize(err) => format!(
                "Invalid JSON at line {}, column {}: {}",
                err.line(),
                err.column(),
                err
            ),
            other => other.to_string(),
        };
        tracing::debug!("Rejected request body: {}", message);
        JsonResponse::build().bad_request(message)
    })
}
