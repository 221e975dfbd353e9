//! Core domain layer: entities and repository capabilities.
//!
//! Entities are plain data structures without business logic. Repository
//! traits are the seams where real persistence would plug in; this sample
//! ships only no-op implementations ([`crate::infrastructure::stubs`]).

pub mod entities;
pub mod repositories;
