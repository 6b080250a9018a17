use actix_web::{web, App, HttpServer};
use fairway::config::server::ServerConfig;
use fairway::middleware::cors::cors_middleware;
use fairway::middleware::request_trace::RequestTrace;
use fairway::middleware::trace_span::TraceSpan;
use fairway::routes;
use fairway::state::app_state::AppState;

mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {e}");
            std::process::exit(1);
        }
    };

    println!(
        "🚀 Starting Fairway on http://{}:{}",
        config.host, config.port
    );

    // Wrap AppState with web::Data before passing to HttpServer
    let data = web::Data::new(AppState::new());

    HttpServer::new(move || {
        App::new()
            .wrap(cors_middleware())
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
