//! Networking modules for the blog REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls and bearer-token headers, `types` defines the
//! wire schema shared by every page.

pub mod api;
pub mod types;
