//! Blackneck Core - Shared domain types.
//!
//! This crate provides the Storefront API domain records consumed by the
//! other Blackneck Coffee components:
//! - `seo` - SEO payload builder (metadata and JSON-LD structured data)
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no database access, no HTTP
//! clients. Records are constructed by an external data-fetching layer and
//! passed around by reference; nothing in this crate mutates them.
//!
//! # Modules
//!
//! - [`types`] - Domain records mirroring the Shopify Storefront API shapes

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
