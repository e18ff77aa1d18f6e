//! Server configuration.
//!
//! Configuration comes from environment variables (optionally via a
//! `.env` file): `DATABASE_URL` for the PostgreSQL connection and
//! `SERVER_PORT` for the listen port. The database is not optional: the
//! service refuses to start without it.

use sqlx::PgPool;

/// Connect to PostgreSQL and run pending migrations.
///
/// Reads `DATABASE_URL`; any failure here aborts startup.
pub async fn load_database() -> Result<PgPool, Box<dyn std::error::Error>> {
    let database_url =
        std::env::var("DATABASE_URL").map_err(|_| "DATABASE_URL is not set")?;

    tracing::info!("connecting to database");

    let pool = PgPool::connect(&database_url).await?;

    tracing::info!("running database migrations");
    sqlx::migrate!().run(&pool).await?;

    Ok(pool)
}

/// The port to listen on, `SERVER_PORT` or 3000.
pub fn server_port() -> u16 {
    std::env::var("SERVER_PORT")
        .ok()
        .and_then(|port| port.parse().ok())
        .unwrap_or(3000)
}
