use actix_web::{web, App, HttpServer};
use tracing::{error, info};
use tracker::config::env::process_env;
use tracker::config::{ServerConfig, UploadConfig};
use tracker::infra::state::build_state;
use tracker::middleware::request_trace::RequestTrace;
use tracker::middleware::structured_logger::StructuredLogger;
use tracker::middleware::trace_span::TraceSpan;
use tracker::routes;
use tracker::state::security_config::SecurityConfig;

mod telemetry;

fn exit_with(message: &str, err: impl std::fmt::Display) -> ! {
    error!(error = %err, "{message}");
    eprintln!("❌ {message}: {err}");
    std::process::exit(1);
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    let security_config = SecurityConfig::from_env(&process_env)
        .unwrap_or_else(|e| exit_with("Invalid security configuration", e));
    let upload_config = UploadConfig::from_env(&process_env)
        .unwrap_or_else(|e| exit_with("Invalid upload configuration", e));
    let server_config = ServerConfig::from_env(&process_env)
        .unwrap_or_else(|e| exit_with("Invalid server configuration", e));

    let app_state = build_state()
        .with_security(security_config)
        .with_uploads(upload_config)
        .build()
        .unwrap_or_else(|e| exit_with("Failed to build application state", e));

    info!(
        host = %server_config.host,
        port = server_config.port,
        upload_root = %app_state.uploads.root,
        "starting learning tracker"
    );

    let data = web::Data::new(app_state);

    HttpServer::new(move || {
        App::new()
            .wrap(StructuredLogger)
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((server_config.host.as_str(), server_config.port))?
    .run()
    .await
}
