//! # rcv-content
//!
//! Content that ships with the toolkit rather than living in the backend:
//!
//! - [`manifest`]: logical image ids mapped to bundled asset references
//! - [`health`]: manifest validation and runtime image-failure tracking
//! - [`trust_flow`]: the trust-experience state machine and pattern rules
//! - [`seen`]: persisted "already shown" flags
//! - [`motion`]: animation presets with a reduced-motion switch
//! - [`registry`]: command-centre pages and stories with lookup helpers

pub mod error;
pub mod health;
pub mod manifest;
pub mod motion;
pub mod registry;
pub mod seen;
pub mod trust_flow;

pub use error::ContentError;
