//! Routeplan Core - Domain models, feature indices, route records, and configuration
//!
//! This crate contains the core domain logic and port definitions for the routeplan system.

pub mod config;
pub mod error;
pub mod features;
pub mod formats;
pub mod models;
pub mod ports;
pub mod route;

pub use error::{Result, RouteplanError};
pub use route::Route;
