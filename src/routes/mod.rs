use actix_web::web;

pub mod rounds;

/// Configure application routes for the server and test harnesses.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Health check: /health
    cfg.configure(crate::health::configure_routes);

    // Round collection: /api/rounds/**
    cfg.service(web::scope("/api/rounds").configure(rounds::configure_routes));
}
