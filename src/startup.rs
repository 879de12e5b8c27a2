use actix_web::dev::Server;
use actix_web::{web, App, HttpServer};
use sqlx::postgres::PgPoolOptions;
use sqlx::{Pool, Postgres};
use std::io::{Error, ErrorKind};
use std::net::TcpListener;
use std::sync::Arc;
use tracing_actix_web::TracingLogger;

use crate::config::{DatabaseSettings, Settings, StorageBackend};
use crate::directory::{StaticSubscriberDirectory, SubscriberDirectory};
use crate::dispatcher::Dispatcher;
use crate::routes::{
    health_check, json_error_handler, list_notification_history, notify_subscribers,
};
use crate::senders::default_senders;
use crate::store::{DeliveryStore, InMemoryDeliveryStore, PgDeliveryStore};

pub struct Application {
    pub port: u16,
    pub server: Server,
}

impl Application {
    pub async fn build(config: Settings) -> Result<Self, std::io::Error> {
        let store: Arc<dyn DeliveryStore> = match config.get_storage_backend() {
            StorageBackend::Postgres => {
                Arc::new(PgDeliveryStore::new(get_connection_db_pool(&config.database)))
            }
            StorageBackend::Memory => Arc::new(InMemoryDeliveryStore::default()),
        };
        let directory: Arc<dyn SubscriberDirectory> = Arc::new(
            StaticSubscriberDirectory::from_entries(config.get_directory_entries())
                .map_err(|err| Error::new(ErrorKind::InvalidData, err))?,
        );
        let dispatcher = Dispatcher::new(directory, default_senders(), store.clone());

        let listener = TcpListener::bind(config.get_address())?;
        let port = listener.local_addr()?.port();
        let server = run(listener, dispatcher, store)?;

        tracing::info!(
            "Server listening on {}:{} with {:?} storage",
            config.application.get_host(),
            port,
            config.get_storage_backend()
        );

        Ok(Self { port, server })
    }

    pub fn get_port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stop(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

pub fn run(
    listener: TcpListener,
    dispatcher: Dispatcher,
    store: Arc<dyn DeliveryStore>,
) -> Result<Server, std::io::Error> {
    let dispatcher = web::Data::new(dispatcher);
    let store: web::Data<dyn DeliveryStore> = web::Data::from(store);

    let server = HttpServer::new(move || {
        // App is where your application logic lives: routing, middlewares, request handler, etc
        App::new()
            // 'wrap' method adds a middleware to the App. This specific middleware provide incoming
            // request logger
            .wrap(TracingLogger::default())
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .route("/health_check", web::get().to(health_check))
            .service(
                web::scope("/api/v1/notification")
                    .route("", web::post().to(notify_subscribers))
                    .route("/logs", web::get().to(list_notification_history)),
            )
            .app_data(dispatcher.clone())
            .app_data(store.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}

pub fn get_connection_db_pool(config: &DatabaseSettings) -> Pool<Postgres> {
    PgPoolOptions::new()
        .acquire_timeout(std::time::Duration::from_secs(2))
        .connect_lazy_with(config.get_db_options())
}
