use actix_http::Request;
use actix_web::body::{BoxBody, EitherBody, MessageBody};
use actix_web::dev::{Service, ServiceResponse};
use actix_web::{test, web, App, Error};
use tracker::infra::state::build_state;
use tracker::middleware::request_trace::RequestTrace;
use tracker::middleware::structured_logger::StructuredLogger;
use tracker::middleware::trace_span::TraceSpan;
use tracker::routes;
use tracker::state::app_state::AppState;
use tracker::state::security_config::SecurityConfig;

pub const TEST_SECRET: &[u8] = b"test_secret_key_for_integration_tests_only";

pub fn test_security() -> SecurityConfig {
    SecurityConfig::new(TEST_SECRET)
}

/// Fresh state with empty in-memory stores.
pub fn test_state() -> AppState {
    build_state()
        .with_security(test_security())
        .build()
        .expect("test state should build")
}

/// Service wired exactly like `main`: same middleware order, same routes.
pub async fn build_app(
    state: AppState,
) -> impl Service<Request, Response = ServiceResponse<EitherBody<BoxBody>>, Error = Error> {
    test::init_service(
        App::new()
            .wrap(StructuredLogger)
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .app_data(web::Data::new(state))
            .configure(routes::configure),
    )
    .await
}

/// Call the service and erase the body type so Problem Details helpers apply.
pub async fn call<S, B>(app: &S, req: Request) -> ServiceResponse<BoxBody>
where
    S: Service<Request, Response = ServiceResponse<B>, Error = Error>,
    B: MessageBody + 'static,
{
    test::call_service(app, req).await.map_into_boxed_body()
}
