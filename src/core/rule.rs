use std::fmt;

use crate::models::{Decision, RequestParams};

/// Declared input of a rule, with the value used when the request omits it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamSpec {
    pub name: &'static str,
    pub default: f64,
}

impl ParamSpec {
    pub const fn new(name: &'static str, default: f64) -> Self {
        Self { name, default }
    }
}

/// Strict comparison against a fixed threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    Above,
    Below,
}

impl Comparison {
    #[inline]
    fn holds(self, value: f64, threshold: f64) -> bool {
        match self {
            Comparison::Above => value > threshold,
            Comparison::Below => value < threshold,
        }
    }

    fn symbol(self) -> &'static str {
        match self {
            Comparison::Above => ">",
            Comparison::Below => "<",
        }
    }
}

/// A single `param <op> threshold` predicate
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Condition {
    pub param: &'static str,
    pub comparison: Comparison,
    pub threshold: f64,
}

impl Condition {
    pub const fn above(param: &'static str, threshold: f64) -> Self {
        Self { param, comparison: Comparison::Above, threshold }
    }

    pub const fn below(param: &'static str, threshold: f64) -> Self {
        Self { param, comparison: Comparison::Below, threshold }
    }

    /// A condition on an unresolved parameter never holds.
    #[inline]
    pub fn holds(&self, params: &ResolvedParams) -> bool {
        params
            .get(self.param)
            .map_or(false, |value| self.comparison.holds(value, self.threshold))
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.param, self.comparison.symbol(), self.threshold)
    }
}

/// What a rule hands back once a branch (or the fallback) is selected
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome {
    Label(&'static str),
    /// `slope * param + intercept`
    Linear {
        param: &'static str,
        slope: f64,
        intercept: f64,
    },
    List(&'static [&'static str]),
}

impl Outcome {
    pub fn produce(&self, params: &ResolvedParams) -> Decision {
        match *self {
            Outcome::Label(label) => Decision::Label(label),
            Outcome::Linear { param, slope, intercept } => {
                // Catalog validation guarantees the parameter is declared.
                let value = params.get(param).unwrap_or_default();
                Decision::Number(slope * value + intercept)
            }
            Outcome::List(items) => Decision::List(items.to_vec()),
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Label(label) => write!(f, "\"{}\"", label),
            Outcome::Linear { param, slope, intercept } => {
                write!(f, "{} * {} + {}", slope, param, intercept)
            }
            Outcome::List(items) => write!(f, "{:?}", items),
        }
    }
}

/// Conjunction of conditions and the outcome it selects
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Branch {
    pub when: &'static [Condition],
    pub then: Outcome,
}

impl Branch {
    #[inline]
    pub fn matches(&self, params: &ResolvedParams) -> bool {
        self.when.iter().all(|condition| condition.holds(params))
    }
}

impl fmt::Display for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let conditions: Vec<String> = self.when.iter().map(|c| c.to_string()).collect();
        let when = if conditions.is_empty() {
            "always".to_string()
        } else {
            conditions.join(" && ")
        };
        write!(f, "{} => {}", when, self.then)
    }
}

/// Request parameters after declared defaults have been applied
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedParams {
    values: Vec<(&'static str, f64)>,
}

impl ResolvedParams {
    pub fn get(&self, name: &str) -> Option<f64> {
        self.values
            .iter()
            .find(|(param, _)| *param == name)
            .map(|(_, value)| *value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        self.values.iter().copied()
    }
}

/// Ordered list of branches over a fixed set of numeric inputs
///
/// Branches are tried in declaration order and the first whose conditions
/// all hold decides the result. When none match, `fallback` is used.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecisionRule {
    pub name: &'static str,
    pub path: &'static str,
    pub response_key: &'static str,
    pub params: &'static [ParamSpec],
    pub branches: &'static [Branch],
    pub fallback: Outcome,
}

impl DecisionRule {
    pub fn declares(&self, name: &str) -> bool {
        self.params.iter().any(|spec| spec.name == name)
    }

    /// Apply declared defaults. Undeclared request parameters are ignored.
    pub fn resolve(&self, params: &RequestParams) -> ResolvedParams {
        let values = self
            .params
            .iter()
            .map(|spec| (spec.name, params.get(spec.name).unwrap_or(spec.default)))
            .collect();

        ResolvedParams { values }
    }

    /// Evaluate the rule against the request parameters
    pub fn decide(&self, params: &RequestParams) -> Decision {
        let resolved = self.resolve(params);

        let outcome = self
            .branches
            .iter()
            .find(|branch| branch.matches(&resolved))
            .map_or(&self.fallback, |branch| &branch.then);

        outcome.produce(&resolved)
    }
}
