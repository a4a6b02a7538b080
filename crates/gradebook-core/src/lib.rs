//! gradebook-core — Student record store, codec, and class statistics.
//!
//! This crate defines the record model, the in-memory store that enforces
//! its invariants, the pipe-delimited file encoding, and the statistics
//! that the CLI and report crates build on.

pub mod codec;
pub mod config;
pub mod error;
pub mod model;
pub mod statistics;
pub mod storage;
pub mod store;

pub use error::{LineError, StoreError, ValidationError};
pub use model::{RecordPatch, StudentRecord};
pub use store::{LineIssue, LoadReport, RecordStore};
