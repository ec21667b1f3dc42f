use axum::http::{HeaderValue, Method};
use tower_http::cors::{Any, CorsLayer};

use crate::server::{
    config::Config,
    data::user::UserRepository,
    error::{config::ConfigError, AppError},
    service::admin::code::AdminCodeService,
};

/// Connects to the database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from configuration, then
/// runs all pending SeaORM migrations so the schema is up to date before the server
/// accepts requests.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Generates and logs a bootstrap admin code when no admin account exists.
///
/// The code is valid for 60 seconds and can be passed as `admin_code` to
/// `POST /api/auth/register` once.
pub async fn check_for_admin(
    db: &sea_orm::DatabaseConnection,
    admin_code_service: &AdminCodeService,
) -> Result<(), AppError> {
    if UserRepository::new(db).admin_exists().await? {
        return Ok(());
    }

    let code = admin_code_service.generate().await;

    tracing::info!(
        "No admin account exists. Register with admin_code \"{}\" within 60 seconds to create one.",
        code
    );

    Ok(())
}

/// Builds the CORS layer, restricted to `CORS_ALLOW_ORIGIN` when it is set.
pub fn cors_layer(config: &Config) -> Result<CorsLayer, AppError> {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any);

    let Some(origin) = &config.cors_allow_origin else {
        return Ok(layer.allow_origin(Any));
    };

    let origin = HeaderValue::from_str(origin).map_err(|e| ConfigError::InvalidEnvVar {
        name: "CORS_ALLOW_ORIGIN".to_string(),
        value: origin.clone(),
        reason: e.to_string(),
    })?;

    Ok(layer.allow_origin(origin))
}
