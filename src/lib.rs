//! Library catalog data layer and admin projection.
//!
//! `librarium` persists the records of a small library catalog (books,
//! authors, genres, languages and physical copies) and exposes the
//! declarative metadata an external admin interface needs to list, filter and
//! edit them. Routing, rendering and authentication belong to the embedding
//! framework; this crate supplies the schema, the operations and the
//! projection.

pub mod admin;
pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
pub use repository::Repository;
pub use services::CatalogService;
