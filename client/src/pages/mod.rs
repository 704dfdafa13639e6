//! Route-level page components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages compose components and bind route-specific behavior: the public
//! landing page, the sign-in/sign-up form, and the protected dashboard.

pub mod auth;
pub mod dashboard;
pub mod landing;
