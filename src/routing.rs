//! Explicit route table built at startup.
//!
//! Routes are declared with [`RouteTable::register`] instead of being
//! discovered from attributes on the request types. Registration rejects
//! duplicate and ambiguously overlapping patterns, and checks that every
//! `{Name}` placeholder names a field of the bound request type, so a broken
//! table is a startup failure rather than a runtime surprise.

use axum::http::Method;

use crate::error::ConfigError;

/// The request DTO types the table can bind routes to.
///
/// Each kind knows the field names a path placeholder may reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    GetOrders,
    CreateOrder,
    GetOrder,
    UpdateOrder,
    DeleteOrder,
}

impl RequestKind {
    /// Name of the request DTO this kind stands for.
    pub fn dto_name(self) -> &'static str {
        match self {
            RequestKind::GetOrders => "GetOrdersRequest",
            RequestKind::CreateOrder => "CreateOrderRequest",
            RequestKind::GetOrder => "GetOrderRequest",
            RequestKind::UpdateOrder => "UpdateOrderRequest",
            RequestKind::DeleteOrder => "DeleteOrderRequest",
        }
    }

    /// Field names placeholders may bind to on this DTO.
    pub fn fields(self) -> &'static [&'static str] {
        match self {
            RequestKind::GetOrders => &["Id"],
            RequestKind::CreateOrder => &[],
            RequestKind::GetOrder => &["Id"],
            RequestKind::UpdateOrder => &["Id"],
            RequestKind::DeleteOrder => &["Id"],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Placeholder(String),
}

/// A parsed path pattern such as `/orders/{Id}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePattern {
    raw: String,
    segments: Vec<Segment>,
}

impl RoutePattern {
    fn parse(pattern: &str) -> Result<Self, ConfigError> {
        if !pattern.starts_with('/') {
            return Err(ConfigError::InvalidPattern {
                pattern: pattern.to_string(),
                reason: "pattern must start with '/'",
            });
        }

        let mut segments = Vec::new();
        for part in pattern.trim_start_matches('/').split('/') {
            if part.is_empty() {
                return Err(ConfigError::InvalidPattern {
                    pattern: pattern.to_string(),
                    reason: "empty path segment",
                });
            }

            if let Some(name) = part.strip_prefix('{') {
                let Some(name) = name.strip_suffix('}') else {
                    return Err(ConfigError::InvalidPattern {
                        pattern: pattern.to_string(),
                        reason: "unterminated placeholder",
                    });
                };
                if name.is_empty() {
                    return Err(ConfigError::InvalidPattern {
                        pattern: pattern.to_string(),
                        reason: "placeholder must be named",
                    });
                }
                segments.push(Segment::Placeholder(name.to_string()));
            } else {
                segments.push(Segment::Literal(part.to_string()));
            }
        }

        Ok(Self {
            raw: pattern.to_string(),
            segments,
        })
    }

    /// The pattern as registered. Placeholder syntax matches Axum's, so this
    /// can be handed to `Router::route` directly.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    fn placeholder_names(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|s| match s {
            Segment::Placeholder(name) => Some(name.as_str()),
            Segment::Literal(_) => None,
        })
    }

    /// Matches a concrete request path, binding placeholder segments by name.
    fn matches<'p>(&self, path: &'p str) -> Option<Vec<(String, &'p str)>> {
        let parts: Vec<&str> = path
            .trim_start_matches('/')
            .split('/')
            .filter(|p| !p.is_empty())
            .collect();

        if parts.len() != self.segments.len() {
            return None;
        }

        let mut params = Vec::new();
        for (segment, part) in self.segments.iter().zip(parts) {
            match segment {
                Segment::Literal(lit) if lit == part => {}
                Segment::Literal(_) => return None,
                Segment::Placeholder(name) => params.push((name.clone(), part)),
            }
        }

        Some(params)
    }

    /// True when both patterns can match the same concrete path: same arity
    /// and every segment pair is either equal literals or involves a
    /// placeholder.
    fn overlaps(&self, other: &RoutePattern) -> bool {
        self.segments.len() == other.segments.len()
            && self
                .segments
                .iter()
                .zip(&other.segments)
                .all(|(a, b)| match (a, b) {
                    (Segment::Literal(x), Segment::Literal(y)) => x == y,
                    _ => true,
                })
    }
}

/// A single (method, pattern, request kind) binding.
#[derive(Debug, Clone)]
pub struct RouteEntry {
    method: Method,
    pattern: RoutePattern,
    kind: RequestKind,
}

impl RouteEntry {
    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn pattern(&self) -> &RoutePattern {
        &self.pattern
    }

    pub fn kind(&self) -> RequestKind {
        self.kind
    }
}

/// The result of matching an incoming (method, path) against the table.
#[derive(Debug, PartialEq, Eq)]
pub struct RouteMatch<'p> {
    pub kind: RequestKind,
    /// Placeholder bindings in pattern order, e.g. `[("Id", "42")]`.
    pub params: Vec<(String, &'p str)>,
}

/// Immutable-after-startup mapping from (HTTP method, path pattern) to a
/// request kind.
#[derive(Debug, Default)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a route.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::DuplicateRoute`] if the (method, path) pair is
    ///   already registered.
    /// - [`ConfigError::AmbiguousRoute`] if an existing pattern for the same
    ///   method could match the same request.
    /// - [`ConfigError::UnknownPlaceholder`] if a placeholder does not name
    ///   a field of `kind`.
    /// - [`ConfigError::InvalidPattern`] if the pattern does not parse.
    pub fn register(
        &mut self,
        method: Method,
        pattern: &str,
        kind: RequestKind,
    ) -> Result<&mut Self, ConfigError> {
        let pattern = RoutePattern::parse(pattern)?;

        for name in pattern.placeholder_names() {
            if !kind.fields().contains(&name) {
                return Err(ConfigError::UnknownPlaceholder {
                    placeholder: name.to_string(),
                    dto: kind.dto_name(),
                });
            }
        }

        for existing in &self.entries {
            if existing.method != method {
                continue;
            }
            if existing.pattern == pattern {
                return Err(ConfigError::DuplicateRoute {
                    method: method.to_string(),
                    path: pattern.raw,
                });
            }
            if existing.pattern.overlaps(&pattern) {
                return Err(ConfigError::AmbiguousRoute {
                    method: method.to_string(),
                    first: existing.pattern.raw.clone(),
                    second: pattern.raw,
                });
            }
        }

        self.entries.push(RouteEntry {
            method,
            pattern,
            kind,
        });
        Ok(self)
    }

    /// Finds the entry matching an incoming request, binding placeholders.
    ///
    /// Returns `None` when no entry matches; the caller maps that to a 404.
    /// Uniqueness is enforced at registration, so the first match is the
    /// only match.
    pub fn resolve<'p>(&self, method: &Method, path: &'p str) -> Option<RouteMatch<'p>> {
        self.entries
            .iter()
            .filter(|entry| entry.method == *method)
            .find_map(|entry| {
                entry.pattern.matches(path).map(|params| RouteMatch {
                    kind: entry.kind,
                    params,
                })
            })
    }

    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }
}
