//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render dashboard cards and creation dialogs. They own only
//! their input fields; persistence and closing belong to the parent page.

pub mod new_document_modal;
pub mod new_organization_modal;
pub mod new_project_modal;
pub mod project_card;
