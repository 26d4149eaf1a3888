//! End-to-end walkthrough of the campus-portal client: restore or create a
//! session, resolve the role-based landing page, run every route through
//! the guard, and export a table as CSV.

use std::sync::Arc;

use campus_portal::{
    ColumnDescriptor, FileTokenStore, SessionStore, before_navigation, default_routes,
    resolve_root, write_csv,
};
use serde_json::json;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let username = std::env::var("PORTAL_USERNAME").unwrap_or_else(|_| "s2021001".to_string());
    let password = std::env::var("PORTAL_PASSWORD").unwrap_or_else(|_| "password".to_string());

    let mut session = SessionStore::hydrate(Arc::new(FileTokenStore::from_env())).await?;

    if !session.is_authenticated() {
        session.login(&username, &password, None).await?;
    }

    tracing::info!("Root path resolves to {}", resolve_root(&session));

    for route in default_routes() {
        let outcome = before_navigation(&mut session, &route).await;
        tracing::info!("{} -> {:?}", route.path, outcome);
    }

    let rows = vec![json!({"name": "Ann", "roles": [{"role": "student"}]})];
    let columns = vec![
        ColumnDescriptor::new("name", "Name"),
        ColumnDescriptor::new("roles", "Roles"),
    ];
    let path = write_csv(&rows, &columns, "Enrolled Students", &username)?;
    tracing::info!("Exported {}", path.display());

    session.logout().await?;
    Ok(())
}
