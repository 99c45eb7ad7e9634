use review_service::configuration::{get_configuration, DatabaseSettings, Settings};
use review_service::connectors::UserServiceConfig;
use sqlx::{Connection, Executor, PgConnection, PgPool};
use wiremock::MockServer;

pub struct TestApp {
    pub address: String,
    pub db_pool: PgPool,
    pub user_service: MockServer,
}

/// Start the server on a random port against a fresh database and a mock User Service.
///
/// `None` when PostgreSQL is not reachable, callers skip in that case.
pub async fn spawn_app() -> Option<TestApp> {
    let mut configuration = get_configuration().expect("Failed to get configuration");
    let user_service = MockServer::start().await;

    configuration.connectors.user_service = Some(UserServiceConfig {
        enabled: true,
        base_url: user_service.uri(),
        timeout_secs: 2,
    });

    spawn_app_with_configuration(configuration, user_service).await
}

pub async fn spawn_app_with_configuration(
    mut configuration: Settings,
    user_service: MockServer,
) -> Option<TestApp> {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");

    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);
    configuration.database.database_name = uuid::Uuid::new_v4().to_string();

    let connection_pool = match configure_database(&configuration.database).await {
        Ok(pool) => pool,
        Err(err) => {
            eprintln!("Skipping tests: failed to connect to postgres: {}", err);
            return None;
        }
    };

    let server = review_service::startup::run(listener, connection_pool.clone(), configuration)
        .await
        .expect("Failed to bind address.");

    let _ = tokio::spawn(server);
    println!("Used Port: {}", port);

    Some(TestApp {
        address,
        db_pool: connection_pool,
        user_service,
    })
}

pub async fn configure_database(config: &DatabaseSettings) -> Result<PgPool, sqlx::Error> {
    let mut connection = PgConnection::connect(&config.connection_string_without_db()).await?;

    connection
        .execute(format!(r#"CREATE DATABASE "{}""#, config.database_name).as_str())
        .await?;

    let connection_pool = PgPool::connect(&config.connection_string()).await?;

    sqlx::migrate!("./migrations").run(&connection_pool).await?;

    Ok(connection_pool)
}
