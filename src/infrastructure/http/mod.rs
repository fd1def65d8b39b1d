//! Outbound HTTP adapters.

pub mod probe;

pub use probe::{HttpProbe, ProbeConfig};
