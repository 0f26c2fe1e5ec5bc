//! Docushop Storefront library.
//!
//! Browser-side storefront behavior as a library: a client-held cart kept
//! in key/value storage, the views that display it, and the product catalog
//! served by a remote API.
//!
//! # Modules
//!
//! - [`storage`] - Web-Storage-like key/value backends
//! - [`cart`] - The cart store and its observer fan-out
//! - [`render`] - Page surfaces kept in sync with the cart
//! - [`catalog`] - Product API client and listing controls
//! - [`config`] - Environment-driven configuration

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod config;
pub mod error;
pub mod render;
pub mod storage;

pub use error::{Error, Result};
