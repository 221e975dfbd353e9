//! REST API layer for HTTP request/response handling.
//!
//! # Modules
//!
//! - [`dto`] - Data Transfer Objects for request/response serialization
//! - [`handlers`] - HTTP request handlers
//! - [`routes`] - The order route registrations

pub mod dto;
pub mod handlers;
pub mod routes;
