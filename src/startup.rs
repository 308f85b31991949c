use crate::configuration::Settings;
use crate::connectors;
use crate::db::Store;
use crate::helpers::JsonResponse;
use crate::middleware::authentication::{Manager, SessionCache};
use crate::routes;
use actix_cors::Cors;
use actix_web::{dev::Server, error, middleware, web, App, HttpServer};
use sqlx::{Pool, Postgres};
use std::net::TcpListener;
use std::sync::Arc;
use std::time::Duration;
use tracing_actix_web::TracingLogger;

pub async fn run(
    listener: TcpListener,
    pg_pool: Pool<Postgres>,
    settings: Settings,
) -> Result<Server, std::io::Error> {
    let store: Arc<dyn Store> = Arc::new(pg_pool);
    let store = web::Data::new(store);

    // Initialize external service connectors
    let completion_connector = connectors::init_completion_service(&settings.connectors);
    let identity_connector = connectors::init_identity_service(&settings.connectors);

    let session_cache = web::Data::new(SessionCache::new(Duration::from_secs(
        settings.session.cache_ttl_secs,
    )));
    let settings = web::Data::new(settings);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(middleware::Compress::default())
            .wrap(Cors::permissive())
            .app_data(settings.clone())
            .app_data(store.clone())
            .app_data(completion_connector.clone())
            .app_data(identity_connector.clone())
            .app_data(session_cache.clone())
            .configure(api)
    })
    .listen(listener)?
    .run();

    Ok(server)
}

/// Malformed or mistyped JSON bodies become a 400 in the usual envelope.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let msg = match &err {
            error::JsonPayloadError::Deserialize(err) => format!(
                "Invalid JSON at line {}, column {}: {}",
                err.line(),
                err.column(),
                err
            ),
            err => err.to_string(),
        };
        JsonResponse::build().bad_request(msg)
    })
}

/// Every route of the service. Shared state is expected to be registered by the caller.
pub fn api(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .service(web::scope("/health_check").service(routes::health_check))
        .service(
            web::scope("/api")
                .service(routes::session::redirect_url_handler)
                .service(routes::session::create_session_handler)
                .service(routes::session::logout_handler)
                .service(web::scope("/guest").service(routes::guest::chat_handler))
                .service(
                    web::scope("/users")
                        .wrap(Manager::new())
                        .service(routes::session::me_handler),
                )
                .service(
                    web::scope("/conversations")
                        .wrap(Manager::new())
                        .service(routes::conversation::list_handler)
                        .service(routes::conversation::add_handler)
                        .service(routes::conversation::update_handler)
                        .service(routes::conversation::delete_handler)
                        .service(routes::message::list_handler)
                        .service(routes::message::send_handler),
                )
                .service(
                    web::scope("/notes")
                        .wrap(Manager::new())
                        .service(routes::note::list_handler)
                        .service(routes::note::item_handler)
                        .service(routes::note::add_handler)
                        .service(routes::note::update_handler)
                        .service(routes::note::delete_handler),
                ),
        );
}
