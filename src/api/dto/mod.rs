//! Data Transfer Objects.
//!
//! Plain serde records, one per operation. A DTO is built per incoming
//! request and discarded once the response is written.

pub mod orders;
