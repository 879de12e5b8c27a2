use reqwest::Response;
use sqlx::{migrate, Connection, Executor, PgConnection, PgPool};
use uuid::Uuid;

use notification_fanout::{
    config::{get_configuration, DatabaseSettings, Settings, StorageBackend},
    domain::new_subscriber::SubscriberEntry,
    startup::{get_connection_db_pool, Application},
};

pub struct TestApp {
    pub address: String,
    pub db_pool: Option<PgPool>,
}

impl TestApp {
    /// Spawns the application on a random port with the in-memory store.
    pub async fn spawn_app(subscribers: Vec<SubscriberEntry>) -> TestApp {
        let mut config = get_configuration().expect("Missing configuration file.");

        // We are using port 0 as way to define a different port per each test. Port 0 is a special case that operating systems
        // take into account: when port is 0, the OS will search for the first available port
        config.set_app_port(0);
        config.set_storage_backend(StorageBackend::Memory);
        config.set_directory_entries(subscribers);

        Self::launch(config, None).await
    }

    /// Same as [`TestApp::spawn_app`] but backed by a fresh Postgres database.
    pub async fn spawn_app_with_postgres(subscribers: Vec<SubscriberEntry>) -> TestApp {
        let mut config = get_configuration().expect("Missing configuration file.");
        let db_test_name = format!("db_{}", Uuid::new_v4().to_string().replace('-', "_"));

        config.set_app_port(0);
        config.set_storage_backend(StorageBackend::Postgres);
        config.set_directory_entries(subscribers);

        let db_pool = configure_db(&mut config.database, db_test_name).await;

        Self::launch(config, Some(db_pool)).await
    }

    async fn launch(config: Settings, db_pool: Option<PgPool>) -> TestApp {
        let application = Application::build(config)
            .await
            .expect("Failed to build application.");

        let address = format!("http://127.0.0.1:{}", application.get_port());

        tokio::spawn(application.run_until_stop());

        TestApp { address, db_pool }
    }

    pub async fn post_notification(&self, body: serde_json::Value) -> Response {
        reqwest::Client::new()
            .post(&format!("{}/api/v1/notification", self.address))
            .json(&body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn get_history(&self) -> Vec<serde_json::Value> {
        reqwest::Client::new()
            .get(&format!("{}/api/v1/notification/logs", self.address))
            .send()
            .await
            .expect("Failed to execute request.")
            .error_for_status()
            .expect("History request failed.")
            .json()
            .await
            .expect("History is not a JSON array.")
    }
}

pub fn subscriber_entry(id: i32, categories: &[&str], channels: &[&str]) -> SubscriberEntry {
    SubscriberEntry {
        id,
        name: format!("Subscriber {}", id),
        email: Some(format!("subscriber{}@email.com", id)),
        phone: Some(format!("+1-555-01{:02}", id)),
        categories: categories.iter().map(|c| c.to_string()).collect(),
        channels: channels.iter().map(|c| c.to_string()).collect(),
    }
}

async fn configure_db(db_config: &mut DatabaseSettings, db_test_name: String) -> PgPool {
    // Create database
    let mut connection = PgConnection::connect_with(&db_config.get_server_options())
        .await
        .expect("Failed to connect to Postgres.");

    connection
        .execute(&*format!(r#"CREATE DATABASE "{}";"#, db_test_name))
        .await
        .expect("Failed to create database.");

    connection
        .close()
        .await
        .expect("Failed to close connection.");

    // Execute migrations
    db_config.set_name(db_test_name);

    let db_pool = get_connection_db_pool(db_config);

    migrate!("./migrations")
        .run(&db_pool)
        .await
        .expect("Failed to run migrations.");

    db_pool
}
