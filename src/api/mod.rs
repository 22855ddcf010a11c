pub mod attendance;
pub mod employee;
pub mod history;
pub mod leave_request;

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use actix_web::{error::ErrorInternalServerError, web};
use tracing::error;

use crate::store::HrStore;

/// The store as shared with every handler. A single lock serializes
/// mutations so paired indices are never observed half-updated.
pub type SharedStore = web::Data<RwLock<HrStore>>;

pub(crate) fn read_store(store: &SharedStore) -> actix_web::Result<RwLockReadGuard<'_, HrStore>> {
    store.read().map_err(|_| {
        error!("Store lock poisoned");
        ErrorInternalServerError("Internal Server Error")
    })
}

pub(crate) fn write_store(store: &SharedStore) -> actix_web::Result<RwLockWriteGuard<'_, HrStore>> {
    store.write().map_err(|_| {
        error!("Store lock poisoned");
        ErrorInternalServerError("Internal Server Error")
    })
}

/// Maps a failed save to a 500, logging the cause.
pub(crate) fn persisted<T>(result: anyhow::Result<T>, what: &str) -> actix_web::Result<()> {
    result.map(|_| ()).map_err(|e| {
        error!(error = %e, what, "Failed to save data file");
        ErrorInternalServerError("Internal Server Error")
    })
}
