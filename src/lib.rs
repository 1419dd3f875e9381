//! # Receipt Points
//!
//! A small HTTP service that scores purchase receipts with loyalty points.
//!
//! Clients submit a receipt, receive an opaque id, and later look up the
//! points awarded for that id. Scoring rules live in
//! [`receipt_points_core::scoring`]; this crate adds configuration, the
//! HTTP layer, and the CLI.
//!
//! ```text
//! ┌──────────┐   ┌──────────┐   ┌──────────┐
//! │   HTTP   │──▶│ Scoring  │──▶│  Store   │
//! │  (axum)  │   │  rules   │   │ (memory) │
//! └──────────┘   └──────────┘   └──────────┘
//! ```
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | TOML configuration parsing |
//! | [`server`] | HTTP endpoints |
//! | [`score_cmd`] | Offline scoring of a receipt file |

pub mod config;
pub mod score_cmd;
pub mod server;

pub use receipt_points_core::{models, scoring, store};
