//! Infrastructure layer.
//!
//! Concrete implementations of the domain capabilities. This sample has no
//! real backends, so the only module is [`stubs`].

pub mod stubs;
