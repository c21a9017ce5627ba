//! Record Service
//!
//! A small REST JSON API exposing CRUD operations over an in-memory,
//! ordered collection of named records.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use crate::config::AppConfig;
pub use crate::error::{AppError, AppResult};

use crate::repository::Repository;
use crate::services::Services;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<Services>,
}

impl AppState {
    /// Wire services over the given repository
    pub fn new(config: AppConfig, repository: Repository) -> Self {
        let services = Services::new(repository, &config.store);
        Self {
            config: Arc::new(config),
            services: Arc::new(services),
        }
    }

    /// State backed by a fresh in-memory store built from the configuration
    pub fn in_memory(config: AppConfig) -> Self {
        let repository = Repository::in_memory(&config.store);
        Self::new(config, repository)
    }
}
