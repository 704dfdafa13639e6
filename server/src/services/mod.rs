//! Domain services used by HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own business logic and persistence concerns so route
//! handlers can stay focused on protocol translation and auth plumbing.
//! Every organization-scoped query goes through `access` first.

pub mod access;
pub mod auth;
pub mod document;
pub mod fields;
pub mod organization;
pub mod project;
pub mod session;
