use review_service::configuration::{DatabaseSettings, Settings};
use review_service::connectors::ConnectorConfig;
use sqlx::postgres::PgPoolOptions;

// the health check never touches the database, a lazy pool is enough
async fn spawn_app() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();

    let settings = Settings {
        database: DatabaseSettings {
            username: "postgres".to_string(),
            password: "postgres".to_string(),
            host: "127.0.0.1".to_string(),
            port: 5432,
            database_name: "reviews".to_string(),
        },
        app_port: port,
        app_host: "127.0.0.1".to_string(),
        connectors: ConnectorConfig::default(),
    };

    let pool = PgPoolOptions::new()
        .connect_lazy(&settings.database.connection_string())
        .expect("Failed to create lazy pool");

    let server = review_service::startup::run(listener, pool, settings)
        .await
        .expect("Failed to bind address.");
    let _ = tokio::spawn(server);

    format!("http://127.0.0.1:{}", port)
}

#[tokio::test]
async fn health_check_works() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .get(&format!("{}/health_check", &address))
        .send()
        .await
        .expect("Failed to execute request.");

    assert!(response.status().is_success());
    assert_eq!(Some(0), response.content_length());
}
