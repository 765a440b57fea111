//! Backoffice Core - Shared types library.
//!
//! This crate provides common types used across all back-office components:
//! - `admin` - Shopify data access, entity transformation, admin tables and the GraphQL proxy
//! - `cli` - Command-line front end over the admin tables
//!
//! # Architecture
//!
//! The core crate contains only types and pure helpers - no I/O, no HTTP
//! clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Shopify GIDs, money coercion and the internal status vocabularies

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
