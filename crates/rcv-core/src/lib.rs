//! # rcv-core
//!
//! Core records, request payloads, and error types for the Recoverlution toolkit.
//!
//! This crate provides the foundational types shared across all `rcv-*` crates:
//! - Entity structs for backend rows (storage assets, soundbite tracks, feed queue, ...)
//! - Serverless-function request and response payloads
//! - Asset query and URL option types
//! - Enums with string round-tripping
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod options;
pub mod requests;
pub mod responses;
