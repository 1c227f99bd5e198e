use std::sync::Arc;

use auth::Authenticator;
use auth::TokenPolicy;
use chrono::Duration;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use trip_service::config::Config;
use trip_service::domain::auth::service::AuthService;
use trip_service::domain::photo::service::PhotoService;
use trip_service::domain::place::service::PlaceService;
use trip_service::domain::task::service::TaskService;
use trip_service::inbound::http::router::create_router;
use trip_service::inbound::http::router::AppState;
use trip_service::outbound::repositories::PostgresPlaceRepository;
use trip_service::outbound::repositories::PostgresTaskRepository;
use trip_service::outbound::repositories::PostgresUserRepository;
use trip_service::outbound::storage::FsPhotoStorage;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "trip_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "trip-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        upload_directory = %config.photos.upload_directory,
        "Configuration loaded"
    );

    let pg_pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = 5,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let authenticator = Arc::new(Authenticator::new(
        TokenPolicy {
            secret: config.jwt.access_secret.as_bytes(),
            ttl: Duration::minutes(config.jwt.access_ttl_minutes),
        },
        TokenPolicy {
            secret: config.jwt.refresh_secret.as_bytes(),
            ttl: Duration::days(config.jwt.refresh_ttl_days),
        },
        config.password.work_factor,
    ));

    let user_repository = Arc::new(PostgresUserRepository::new(pg_pool.clone()));
    let place_repository = Arc::new(PostgresPlaceRepository::new(pg_pool.clone()));
    let task_repository = Arc::new(PostgresTaskRepository::new(pg_pool));
    let photo_storage = Arc::new(FsPhotoStorage::new(config.photos.upload_directory.as_str())?);
    tracing::info!(
        upload_directory = %config.photos.upload_directory,
        "Photo storage ready"
    );

    let photo_service = Arc::new(PhotoService::new(photo_storage, config.photos.max_file_size));
    let auth_service = Arc::new(AuthService::new(
        user_repository,
        Arc::clone(&authenticator),
    ));
    let place_service = Arc::new(PlaceService::new(
        place_repository,
        Arc::clone(&photo_service),
    ));
    let task_service = Arc::new(TaskService::new(task_repository));

    let state = AppState {
        auth_service,
        place_service,
        task_service,
        photo_service,
        authenticator,
    };

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let router = create_router(state, config.photos.max_file_size as usize);
    axum::serve(http_listener, router).await?;

    Ok(())
}
