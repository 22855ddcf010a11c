//! In-memory multi-index HR store with flat-file persistence and an HTTP
//! front end.

pub mod api;
pub mod codec;
pub mod collections;
pub mod config;
pub mod docs;
pub mod model;
pub mod routes;
pub mod store;

pub use config::Config;
pub use store::{DataFiles, HrStore, Recording};
