//! # Receipt Points Core
//!
//! Shared logic for Receipt Points: receipt models, the points scoring
//! rules, and the store abstraction.
//!
//! This crate contains no tokio, axum, or filesystem I/O. The HTTP
//! service and CLI live in the `receipt-points` crate.

pub mod models;
pub mod scoring;
pub mod store;
