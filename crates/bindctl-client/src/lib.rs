//! # bindctl-client
//!
//! HTTP client for the binding rule endpoints of the coordination service.
//!
//! [`HttpRuleStore`] implements [`bindctl_core::RuleStore`] over the
//! service's JSON API:
//! - Read, list, create, update and delete binding rules
//! - ACL token passed on every request
//! - Store rejections surfaced with the service's message verbatim

#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod client;
pub mod config;
pub mod error;

pub use client::HttpRuleStore;
pub use config::ClientConfig;
pub use error::{Error, Result};
