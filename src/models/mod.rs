// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Decision, RequestParams, RuleResponse};
pub use requests::{params_from_json, params_from_query, InputValidationError};
pub use responses::{ErrorResponse, HealthResponse, ParamSummary, RuleSummary, RulesResponse, WelcomeResponse};
