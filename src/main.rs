use rusty_movie_rental::{
    adapters::{
        log::LogNotifier,
        mock::{CreditCheck as MockCreditCheck, RentalStore as InMemoryRentalStore},
        postgres::PostgresRentalStore,
    },
    api::{handlers::AppState, router::create_router},
    application::rental::ServiceDependencies,
    config::AppConfig,
    ports::{RentalStore, SystemClock},
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rusty_movie_rental=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env().expect("Invalid configuration");

    // Rental store: PostgreSQL when DATABASE_URL is set, in-memory otherwise
    let rental_store: Arc<dyn RentalStore> = match &config.database_url {
        Some(database_url) => {
            tracing::info!("Connecting to PostgreSQL");

            let pool = sqlx::postgres::PgPoolOptions::new()
                .max_connections(5)
                .connect(database_url)
                .await
                .expect("Failed to connect to database");

            sqlx::migrate!("./migrations")
                .run(&pool)
                .await
                .expect("Failed to run migrations");

            Arc::new(PostgresRentalStore::new(pool))
        }
        None => {
            tracing::warn!("DATABASE_URL not set, rentals are kept in memory");
            Arc::new(InMemoryRentalStore::new())
        }
    };

    let service_deps = ServiceDependencies {
        rental_store,
        credit_check: Arc::new(MockCreditCheck::with_denylist(config.denylist.clone())),
        notifier: Arc::new(LogNotifier::new()),
        clock: Arc::new(SystemClock),
        policy: config.rental_policy(),
    };

    let app_state = Arc::new(AppState { service_deps });
    let app = create_router(app_state);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind to address");

    tracing::info!(off_day = ?config.off_day, "Server listening on {}", addr);

    axum::serve(listener, app)
        .await
        .expect("Failed to start server");
}
