//! CLI command implementations.

pub mod common;
pub mod encode;
pub mod gates;
pub mod version;
