//! Client application state modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `auth` is shared across routes via context; `dashboard` is owned by the
//! dashboard page and drives the selection and modal flow.

pub mod auth;
pub mod dashboard;
