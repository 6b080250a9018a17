//! Test service builder: given an AppState, build an initialized Actix
//! test service with the production routes and trace middleware.

use actix_web::body::BoxBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::Error as ActixError;
use actix_web::{test, web, App};
use fairway::middleware::request_trace::RequestTrace;
use fairway::middleware::trace_span::TraceSpan;
use fairway::routes;
use fairway::state::app_state::AppState;

/// Return type is `impl Service<...>` so callers don't have to name the
/// opaque service type.
pub async fn create_test_app(
    state: AppState,
) -> impl Service<actix_http::Request, Response = ServiceResponse<BoxBody>, Error = ActixError> {
    test::init_service(
        App::new()
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .app_data(web::Data::new(state))
            .configure(routes::configure),
    )
    .await
}
