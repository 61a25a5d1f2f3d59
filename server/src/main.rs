//! Users and partners CRUD server.
//!
//! Run from repo root: `cargo run -p crud-server`
//! Settings come from the environment (or `.env`): `DATABASE_URL`, `BIND_ADDR`,
//! `DB_MAX_CONNECTIONS`, `BODY_LIMIT_BYTES`.

use crud_resources::{app, bootstrap, Settings};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new(
                    "crud_resources=info,crud_server=info,tower_http=info",
                )
            }),
        )
        .init();

    let settings = Settings::from_env();
    let state = bootstrap(&settings).await?;
    let app = app(state, &settings);

    let listener = TcpListener::bind(&settings.bind_addr).await?;
    tracing::info!("listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
