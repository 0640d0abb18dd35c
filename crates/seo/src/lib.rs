//! Blackneck SEO - metadata and structured data for the storefront.
//!
//! This crate turns already-fetched Storefront API records into the
//! normalized SEO payload a page response carries: title, description,
//! robots directives, social media image, and JSON-LD structured data.
//! Every operation is a synchronous, side-effect-free transform; the crate
//! performs no I/O and owns none of the input records.
//!
//! # Architecture
//!
//! - [`payload`] - one builder per page type, plus the [`SeoPage`] dispatch
//! - [`schema`] - typed schema.org JSON-LD vocabulary
//! - [`meta`] - meta-tag descriptors derived from a built payload
//! - [`site`] - site-wide brand constants
//!
//! # Example
//!
//! ```rust,ignore
//! use blackneck_seo::payload;
//!
//! let product = client.get_product_by_handle("yunnan-washed").await?;
//! let seo = payload::product(&product, &request_url)?;
//! let tags = blackneck_seo::meta::meta_tags(Some(&seo));
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod error;
pub mod meta;
pub mod payload;
pub mod schema;
pub mod site;

pub use error::SeoError;
pub use meta::{MetaTag, meta_tags};
pub use payload::{Robots, SeoConfig, SeoMedia, SeoPage, truncate};
pub use schema::{JsonLd, StructuredData};
