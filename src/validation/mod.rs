//! Verb-scoped request validation.
//!
//! A [`RuleSet`] groups rules that each apply to a subset of HTTP verbs.
//! Handlers run the rule set for their request DTO before any work happens;
//! a non-empty violation list turns into a 400 response and the handler body
//! is never reached.

use axum::http::Method;
use validator::ValidationError;

use crate::error::AppError;

pub mod orders;

/// A failed rule, tagged with the DTO field it applies to.
#[derive(Debug)]
pub struct RuleViolation {
    pub field: &'static str,
    pub error: ValidationError,
}

impl RuleViolation {
    /// The configured message, falling back to the rule code.
    pub fn message(&self) -> &str {
        self.error
            .message
            .as_deref()
            .unwrap_or(self.error.code.as_ref())
    }
}

struct Rule<T> {
    applies_to: Vec<Method>,
    field: &'static str,
    code: &'static str,
    message: &'static str,
    predicate: Box<dyn Fn(&T) -> bool + Send + Sync>,
}

/// An ordered set of verb-scoped rules for one request DTO type.
///
/// Built once at startup and evaluated per request.
pub struct RuleSet<T> {
    rules: Vec<Rule<T>>,
}

impl<T> RuleSet<T> {
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Adds a rule that applies only when the request verb is in
    /// `applies_to`. The predicate returns `true` when the DTO is valid.
    pub fn rule(
        mut self,
        applies_to: &[Method],
        field: &'static str,
        code: &'static str,
        message: &'static str,
        predicate: impl Fn(&T) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.rules.push(Rule {
            applies_to: applies_to.to_vec(),
            field,
            code,
            message,
            predicate: Box::new(predicate),
        });
        self
    }

    /// Evaluates every rule whose verb scope includes `method`.
    ///
    /// Returns one violation per failed rule; an empty list means the DTO is
    /// valid for this verb.
    pub fn validate(&self, method: &Method, dto: &T) -> Vec<RuleViolation> {
        self.rules
            .iter()
            .filter(|rule| rule.applies_to.contains(method))
            .filter(|rule| !(rule.predicate)(dto))
            .map(|rule| {
                let mut error = ValidationError::new(rule.code);
                error.message = Some(rule.message.into());
                RuleViolation {
                    field: rule.field,
                    error,
                }
            })
            .collect()
    }

    /// Convenience wrapper turning violations into an [`AppError`].
    pub fn check(&self, method: &Method, dto: &T) -> Result<(), AppError> {
        let violations = self.validate(method, dto);
        if violations.is_empty() {
            Ok(())
        } else {
            Err(AppError::from_violations(violations))
        }
    }
}

impl<T> Default for RuleSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Probe {
        value: i64,
    }

    fn probe_rules() -> RuleSet<Probe> {
        RuleSet::new().rule(
            &[Method::GET, Method::POST],
            "Value",
            "greater_than",
            "Value has to be greater than 10",
            |p: &Probe| p.value > 10,
        )
    }

    #[test]
    fn test_passing_dto_yields_no_violations() {
        let rules = probe_rules();
        assert!(rules.validate(&Method::GET, &Probe { value: 11 }).is_empty());
    }

    #[test]
    fn test_failing_dto_yields_field_and_message() {
        let rules = probe_rules();

        let violations = rules.validate(&Method::POST, &Probe { value: 10 });
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].field, "Value");
        assert_eq!(violations[0].message(), "Value has to be greater than 10");
        assert_eq!(violations[0].error.code, "greater_than");
    }

    #[test]
    fn test_out_of_scope_verb_skips_rule() {
        let rules = probe_rules();

        assert!(
            rules
                .validate(&Method::DELETE, &Probe { value: 0 })
                .is_empty()
        );
        assert!(rules.validate(&Method::PUT, &Probe { value: 0 }).is_empty());
    }

    #[test]
    fn test_check_maps_to_validation_error() {
        let rules = probe_rules();

        assert!(rules.check(&Method::GET, &Probe { value: 99 }).is_ok());

        let err = rules.check(&Method::GET, &Probe { value: 1 }).unwrap_err();
        assert!(matches!(err, AppError::Validation { .. }));
    }
}
