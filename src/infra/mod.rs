//! Infrastructure layer (adapters/implementations).
//!
//! IO-bound pieces: the backend HTTP client, persisted session storage, and
//! the config file.

pub mod api;
pub mod app_config;
pub mod storage;
