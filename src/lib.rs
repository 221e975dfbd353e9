//! # Order Service
//!
//! An order management sample service built with Axum, demonstrating
//! explicit route registration, verb-scoped request validation, and
//! startup-time dependency resolution.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Entities and repository traits
//! - **Application Layer** ([`application`]) - The order service and mapper seam
//! - **Infrastructure Layer** ([`infrastructure`]) - No-op stub implementations
//! - **API Layer** ([`api`]) - Handlers, DTOs, and route registrations
//!
//! The cross-cutting pieces are the explicit [`routing::RouteTable`], the
//! verb-scoped [`validation::RuleSet`], and the startup-time
//! [`container::Container`]. All three are immutable once the server starts,
//! so concurrent requests share them without coordination.
//!
//! ## Quick Start
//!
//! ```bash
//! # Optional overrides
//! export LISTEN="0.0.0.0:3000"
//! export BASE_URL="http://localhost:3000"
//!
//! cargo run
//! ```

pub mod api;
pub mod application;
pub mod container;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod routing;
pub mod state;
pub mod validation;

pub mod config;
pub mod server;

pub mod routes;

pub use error::{AppError, ConfigError};
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::OrderService;
    pub use crate::container::{Container, Scope};
    pub use crate::error::{AppError, ConfigError};
    pub use crate::routing::{RequestKind, RouteTable};
    pub use crate::state::AppState;
    pub use crate::validation::RuleSet;
}
