pub mod config;
pub mod directory;
pub mod dispatcher;
pub mod domain;
pub mod routes;
pub mod senders;
pub mod startup;
pub mod store;
pub mod telemetry;
