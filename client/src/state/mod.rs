//! Shared reactive state provided through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` wraps each state struct in an `RwSignal` and provides it; pages read
//! it with `expect_context`. Page-local list and review state is not here,
//! it lives in the page that owns it.

pub mod session;
pub mod toast;
