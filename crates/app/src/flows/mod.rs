//! User-facing flows, one module per page surface.

pub mod admin;
pub mod analytics;
pub mod auth;
pub mod booking;
