//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render dashboard chrome, tables, and modals while reading or
//! writing shared state from Leptos context providers.

pub mod charts;
pub mod file_picker;
pub mod kpi_card;
pub mod layout;
pub mod pagination;
pub mod review_modal;
pub mod status_badge;
pub mod toast_host;
