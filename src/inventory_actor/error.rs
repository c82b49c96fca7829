//! Error types for the inventory actor.

use thiserror::Error;

/// Errors that can occur during inventory operations.
///
/// Also returned by the pure helpers in [`crate::dashboard`] and
/// [`crate::model`] so callers match on a single type.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum InventoryError {
    /// A record breaks one of its invariants.
    #[error("Invalid record {id}: {field} = {value}")]
    InvalidRecord {
        id: String,
        field: &'static str,
        value: String,
    },

    /// A batch was rejected because of the record at `index`.
    #[error("Invalid record at position {index}: {source}")]
    InvalidBatch {
        index: usize,
        #[source]
        source: Box<InventoryError>,
    },

    /// The requested item was not found.
    #[error("Item not found: {0}")]
    NotFound(String),

    /// The provided quantity is invalid (zero).
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(i64),

    /// The adjustment would take the quantity below zero.
    #[error("Insufficient stock: requested {requested}, available {available}")]
    InsufficientStock { requested: i64, available: i64 },

    /// A fixture, session or config document could not be parsed.
    #[error("Fixture error: {0}")]
    Fixture(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for InventoryError {
    fn from(msg: String) -> Self {
        InventoryError::ActorCommunicationError(msg)
    }
}
