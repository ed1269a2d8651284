//! Networking for the browser build.
//!
//! SYSTEM CONTEXT
//! ==============
//! `transport` implements `content::Transport` over `gloo-net`. Typed calls
//! themselves live in `content::api` and are shared with the CLI.

pub mod transport;
