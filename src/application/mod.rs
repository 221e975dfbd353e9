//! Application layer: service orchestration over the domain capabilities.

pub mod mappers;
pub mod services;
