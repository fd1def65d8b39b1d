//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer, providing
//! concrete implementations for data persistence and outbound HTTP.
//!
//! # Modules
//!
//! - [`http`] - Reachability probe over HTTP
//! - [`persistence`] - PostgreSQL and in-memory repository implementations

pub mod http;
pub mod persistence;
