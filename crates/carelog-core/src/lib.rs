//! Service plumbing shared by Carelog services.
//!
//! Health handlers, request-id middleware, and tracing initialization.
//! Domain logic never lives here.

pub mod health;
pub mod middleware;
pub mod tracing;
