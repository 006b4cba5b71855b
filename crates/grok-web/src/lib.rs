//! Client for the indexer web service configuration API
//!
//! The service is a black box reached over REST: this crate only moves
//! opaque configuration text and project names back and forth.

pub mod client;
pub mod error;

pub use client::ServiceClient;
pub use error::{Error, Result};
