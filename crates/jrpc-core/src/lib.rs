// Rust guideline compliant 2026-10-19

//! jrpc Core Library
//!
//! This crate provides the JSON-RPC response model:
//! - Response envelope (wire form, parsing, derived HTTP status)
//! - Error categories and their HTTP status mapping
//! - Structured RPC failure descriptor
//! - Pluggable error classification
//! - Error types and configuration

pub mod category;
pub mod classifier;
pub mod config;
pub mod envelope;
pub mod error;
pub mod rpc_error;

pub use category::Category;
pub use classifier::{ErrorClassifier, RpcErrorClassifier, Unrecognized};
pub use config::{Config, OutputFormat};
pub use envelope::{ResponseEnvelope, STATUS_INTERNAL_SERVER_ERROR, STATUS_OK};
pub use error::{Error, Result};
pub use rpc_error::RpcCallError;
