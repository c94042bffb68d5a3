//! Core domain model for marquee.
//!
//! This crate defines the catalog model (titles and their category tags),
//! the CSV catalog loader, the error type, and layered configuration.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod config;
pub mod error;
pub mod load;
pub mod model;

pub use config::Config;
pub use error::{Error, Result};
pub use load::{load_catalog, read_catalog, Columns};
pub use model::{Catalog, CatalogEntry};
