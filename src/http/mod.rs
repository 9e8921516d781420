//! HTTP transport layer
//!
//! Route handlers for the liveness message and the vibe endpoint.

pub mod handlers;
