//! Common types used across the Kraken client library.

pub mod common;
pub mod envelope;
pub mod last_id;

pub use common::*;
pub use envelope::{Paginated, ResponseEnvelope};
pub use last_id::extract_last_id;
