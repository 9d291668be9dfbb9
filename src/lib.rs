//! Translation catalog service.
//!
//! Translations are described by static business-object class descriptors
//! (`Translation`, `TranslationUrlParams`) registered by name, stored in a
//! pluggable store and served over HTTP.

pub mod bo;
pub mod config;
pub mod context;
pub mod metrics;
pub mod models;
pub mod seed;
pub mod server;
pub mod store;
