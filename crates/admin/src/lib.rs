//! Backoffice Admin library.
//!
//! Shopify data access for the back-office: typed filters rendered to
//! Shopify search syntax, a GraphQL transport, defensive wire-to-domain
//! conversions, a paginated fetch client and per-screen table controllers.
//! The `backoffice-admin` binary serves the GraphQL proxy the transport
//! posts to.
//!
//! # Security
//!
//! The proxy holds the Shopify Admin API token (HIGH PRIVILEGE). The library
//! side never sees it; it only talks to the proxy endpoint.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod components;
pub mod config;
pub mod error;
pub mod routes;
pub mod shopify;
pub mod state;
pub mod tables;
