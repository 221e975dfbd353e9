//! Startup-time dependency container.
//!
//! Capabilities (typically `Arc<dyn Trait>` handles) are registered with a
//! provider and a reuse scope, then resolved while assembling [`crate::state::AppState`].
//! Resolution of a capability that was never registered is a
//! [`ConfigError::MissingRegistration`] and aborts startup. The container is
//! not consulted after startup; handlers see only the resolved object graph.

use std::any::{Any, TypeId, type_name};
use std::collections::HashMap;
use std::sync::Mutex;

use crate::error::ConfigError;

/// How long a resolved instance is reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// One instance per container, constructed on first resolve.
    Container,
    /// A fresh instance on every resolve.
    Transient,
}

type Provider = Box<dyn Fn() -> Box<dyn Any + Send + Sync> + Send + Sync>;

struct Registration {
    scope: Scope,
    provider: Provider,
}

/// Capability registry keyed by type.
#[derive(Default)]
pub struct Container {
    registrations: HashMap<TypeId, Registration>,
    reused: Mutex<HashMap<TypeId, Box<dyn Any + Send + Sync>>>,
}

impl Container {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a provider for capability `T`. Registering the same
    /// capability again replaces the previous provider.
    pub fn register<T>(&mut self, scope: Scope, provider: impl Fn() -> T + Send + Sync + 'static)
    where
        T: Clone + Send + Sync + 'static,
    {
        self.registrations.insert(
            TypeId::of::<T>(),
            Registration {
                scope,
                provider: Box::new(move || Box::new(provider())),
            },
        );
    }

    /// Resolves capability `T` according to its registered scope.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRegistration`] when no provider was
    /// registered for `T`.
    pub fn resolve<T>(&self) -> Result<T, ConfigError>
    where
        T: Clone + Send + Sync + 'static,
    {
        let registration = self.registrations.get(&TypeId::of::<T>()).ok_or(
            ConfigError::MissingRegistration {
                capability: type_name::<T>(),
            },
        )?;

        match registration.scope {
            Scope::Transient => Ok(Self::instantiate::<T>(registration)),
            Scope::Container => {
                let mut reused = self
                    .reused
                    .lock()
                    .unwrap_or_else(|poisoned| poisoned.into_inner());

                if let Some(cached) = reused.get(&TypeId::of::<T>()) {
                    let instance = cached
                        .downcast_ref::<T>()
                        .expect("cached instance has the registered type");
                    return Ok(instance.clone());
                }

                let instance = Self::instantiate::<T>(registration);
                reused.insert(TypeId::of::<T>(), Box::new(instance.clone()));
                Ok(instance)
            }
        }
    }

    fn instantiate<T: Send + Sync + 'static>(registration: &Registration) -> T {
        *(registration.provider)()
            .downcast::<T>()
            .expect("provider returns the registered type")
    }
}
