// File: services/contactbook_backend/src/main.rs
use axum::{routing::get, Router};
use contactbook_common::{is_gcal_enabled, logging};
use contactbook_config::{load_config, AppConfig};
use contactbook_contact::routes as contact_routes;
use contactbook_gcal::{routes as gcal_routes, GcalState};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

async fn welcome() -> &'static str {
    "Welcome to Contactbook API!"
}

/// Builds the full application router for `config`.
fn app(config: &AppConfig) -> Router {
    let gcal_state = match config.gcal.as_ref() {
        Some(gcal_config) if is_gcal_enabled(config) => {
            info!("Calendar booking enabled for calendar {}", gcal_config.calendar_id());
            Some(Arc::new(GcalState::from_config(gcal_config)))
        }
        _ => {
            warn!("Calendar booking disabled; booking routes are not mounted");
            None
        }
    };

    let mut router = Router::new()
        .route("/", get(welcome))
        .merge(contact_routes(gcal_state.clone()));
    if let Some(state) = gcal_state {
        router = router.merge(gcal_routes::routes(state));
    }

    // a nested "/" only answers "/api", so "/api/" is routed explicitly
    #[allow(unused_mut)] // for the features it needs to be mutable
    let mut app = Router::new()
        .route("/api/", get(welcome))
        .nest("/api", router);

    // Conditionally add Swagger UI and JSON endpoint if openapi feature enabled
    #[cfg(feature = "openapi")]
    {
        use contactbook_contact::doc::ContactApiDoc;
        use contactbook_gcal::doc::GcalApiDoc;
        use utoipa::OpenApi;
        use utoipa_swagger_ui::SwaggerUi;

        #[derive(OpenApi)]
        #[openapi(
            info(
                title = "Contactbook API",
                version = "0.1.0",
                description = "Contact form and appointment booking API",
                license(name = "MIT", url = "https://opensource.org/licenses/MIT")
            ),
            servers( (url = "/api", description = "Main API Prefix")),
        )]
        struct ApiDoc;

        let mut openapi_doc = ApiDoc::openapi();
        openapi_doc.merge(GcalApiDoc::openapi());
        openapi_doc.merge(ContactApiDoc::openapi());
        info!("Adding Swagger UI at /api/docs");

        let swagger_ui = SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", openapi_doc);
        app = app.merge(swagger_ui);
    }

    app.layer(TraceLayer::new_for_http())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();

    let config = load_config()?;
    let app = app(&config);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Starting server at http://{}", addr);
    info!("API endpoints available at http://{}/api", addr);

    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}
