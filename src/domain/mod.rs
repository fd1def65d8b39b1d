//! Domain layer containing business entities and ports.
//!
//! This module defines the core data model and the interfaces (traits) that the
//! application layer depends on, independent of infrastructure concerns.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`probe`] - Reachability check for URLs submitted for shortening
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Traits define contracts implemented by the infrastructure layer
//! - Business logic is encapsulated in services (see [`crate::application::services`])

pub mod entities;
pub mod probe;
pub mod repositories;
