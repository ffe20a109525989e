use std::collections::HashSet;

use thiserror::Error;

use crate::core::rule::{DecisionRule, Outcome};
use crate::models::{RequestParams, RuleResponse};

/// Problems detected while loading a rule catalog
#[derive(Debug, Error, PartialEq)]
pub enum CatalogError {
    #[error("Duplicate rule name: {0}")]
    DuplicateName(String),

    #[error("Duplicate rule path: {0}")]
    DuplicatePath(String),

    #[error("Rule path {0} collides with a built-in route")]
    ReservedPath(String),

    #[error("Rule {rule} references undeclared parameter {param}")]
    UndeclaredParam { rule: String, param: String },

    #[error("Rule {rule} contains a non-finite constant")]
    NonFiniteConstant { rule: String },
}

/// Paths served by fixed routes; rules may not claim them
pub const RESERVED_PATHS: &[&str] = &["/", "/hello", "/health", "/api/rules"];

/// Prefix of the by-name evaluation routes (`/api/rules/{name}`)
pub const RULES_BY_NAME_PREFIX: &str = "/api/rules/";

fn is_reserved(path: &str) -> bool {
    RESERVED_PATHS.contains(&path) || path.starts_with(RULES_BY_NAME_PREFIX)
}

/// Lookup of a rule name that is not in the catalog
#[derive(Debug, Error, PartialEq)]
#[error("Unknown rule: {0}")]
pub struct UnknownRule(pub String);

/// Stateless evaluator over a validated rule catalog
///
/// Holds no mutable state, so a single instance can be cloned into every
/// worker and evaluated concurrently.
#[derive(Debug, Clone, Copy)]
pub struct ThresholdResponder {
    rules: &'static [DecisionRule],
}

impl ThresholdResponder {
    pub fn new(rules: &'static [DecisionRule]) -> Result<Self, CatalogError> {
        let mut names = HashSet::new();
        let mut paths = HashSet::new();

        for rule in rules {
            if !names.insert(rule.name) {
                return Err(CatalogError::DuplicateName(rule.name.to_string()));
            }
            if !paths.insert(rule.path) {
                return Err(CatalogError::DuplicatePath(rule.path.to_string()));
            }
            if is_reserved(rule.path) {
                return Err(CatalogError::ReservedPath(rule.path.to_string()));
            }
            validate_rule(rule)?;
        }

        Ok(Self { rules })
    }

    pub fn rules(&self) -> &'static [DecisionRule] {
        self.rules
    }

    pub fn find(&self, name: &str) -> Option<&'static DecisionRule> {
        self.rules.iter().find(|rule| rule.name == name)
    }

    /// Evaluate a rule and wrap the decision under its response key
    pub fn evaluate(&self, rule: &DecisionRule, params: &RequestParams) -> RuleResponse {
        let value = rule.decide(params);

        tracing::debug!("Rule {} evaluated to {:?}", rule.name, value);

        RuleResponse::new(rule.response_key, value)
    }

    pub fn evaluate_by_name(
        &self,
        name: &str,
        params: &RequestParams,
    ) -> Result<RuleResponse, UnknownRule> {
        let rule = self
            .find(name)
            .ok_or_else(|| UnknownRule(name.to_string()))?;

        Ok(self.evaluate(rule, params))
    }
}

fn validate_rule(rule: &DecisionRule) -> Result<(), CatalogError> {
    let undeclared = |param: &str| CatalogError::UndeclaredParam {
        rule: rule.name.to_string(),
        param: param.to_string(),
    };
    let non_finite = || CatalogError::NonFiniteConstant { rule: rule.name.to_string() };

    if rule.params.iter().any(|spec| !spec.default.is_finite()) {
        return Err(non_finite());
    }

    let outcomes = rule
        .branches
        .iter()
        .map(|branch| &branch.then)
        .chain(std::iter::once(&rule.fallback));

    for condition in rule.branches.iter().flat_map(|branch| branch.when) {
        if !rule.declares(condition.param) {
            return Err(undeclared(condition.param));
        }
        if !condition.threshold.is_finite() {
            return Err(non_finite());
        }
    }

    for outcome in outcomes {
        if let Outcome::Linear { param, slope, intercept } = outcome {
            if !rule.declares(param) {
                return Err(undeclared(*param));
            }
            if !slope.is_finite() || !intercept.is_finite() {
                return Err(non_finite());
            }
        }
    }

    Ok(())
}
