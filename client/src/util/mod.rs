//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate routing and form rules from page and component
//! markup so they can be unit tested without a browser.

pub mod auth;
pub mod form;
