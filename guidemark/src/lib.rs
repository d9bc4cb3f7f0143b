//! Expose guidemark's internal API for use in integration tests. While it
//! *could* be useful, we do not recommend using this API in production code.
pub mod cli;
pub mod config;
pub mod error;
pub mod html;
pub mod utils;
