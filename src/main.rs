use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use carpool_match::config::Settings;
use carpool_match::routes::{self, AppState};
use carpool_match::telemetry;
use tracing::info;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::load().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        std::io::Error::other(format!("Configuration error: {}", e))
    })?;

    // Initialize logging
    telemetry::init(&settings.logging).map_err(|e| std::io::Error::other(e.to_string()))?;

    info!("Starting carpool matching service...");

    let app_state = AppState::from_settings(&settings);

    info!(
        "Matcher initialized with weights: {:?} (max score {})",
        app_state.matcher.weights(),
        app_state.matcher.weights().max_score()
    );
    info!("Fare estimator initialized with constants: {:?}", app_state.fare.constants());

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
