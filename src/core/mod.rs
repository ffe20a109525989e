// Core rule exports
pub mod catalog;
pub mod responder;
pub mod rule;

pub use catalog::CATALOG;
pub use responder::{CatalogError, ThresholdResponder, UnknownRule};
pub use rule::{Branch, Comparison, Condition, DecisionRule, Outcome, ParamSpec, ResolvedParams};
