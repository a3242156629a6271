use sea_orm::Database;
use tracing::info;

use carelog_records::config::RecordsConfig;
use carelog_records::infra::mailer::LogMailer;
use carelog_records::router::build_router;
use carelog_records::state::AppState;

#[tokio::main]
async fn main() {
    carelog_core::tracing::init_tracing();

    let config = RecordsConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    let state = AppState {
        db,
        jwt_secret: config.jwt_secret,
        access_token_ttl_secs: config.access_token_ttl_secs,
        refresh_token_ttl_secs: config.refresh_token_ttl_secs,
        mailer: LogMailer,
    };

    let router = build_router(state);
    let addr = format!("0.0.0.0:{}", config.records_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!("records service listening on {addr}");
    axum::serve(listener, router).await.expect("server error");
}
