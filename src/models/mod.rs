//! Data models for the record service

pub mod record;

pub use record::{Record, RecordPayload};
