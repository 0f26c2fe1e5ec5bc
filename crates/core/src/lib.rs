//! Docushop Core - Shared types library.
//!
//! This crate provides the types used across all Docushop components:
//! - `storefront` - Cart store, storage backends, render fan-out and catalog
//! - `cli` - Command-line front end over a file-backed cart
//!
//! # Architecture
//!
//! The core crate contains only types and pure computations - no I/O, no
//! storage access, no HTTP clients. This keeps it lightweight and allows it
//! to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Identifiers, prices, quantities, line items, settings,
//!   derived totals and catalog products

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
