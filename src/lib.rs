//! Weather Rules - threshold rule service
//!
//! Every endpoint of the service is a static [`DecisionRule`]: a set of
//! numeric inputs with defaults, an ordered list of threshold branches and a
//! fallback. A single stateless [`ThresholdResponder`] evaluates them; the
//! actix-web routes are a thin adapter that parses query strings and JSON
//! bodies into validated parameters.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod telemetry;

// Re-export commonly used types
pub use crate::core::{DecisionRule, ThresholdResponder, CATALOG};
pub use crate::models::{Decision, InputValidationError, RequestParams, RuleResponse};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let responder = ThresholdResponder::new(CATALOG).unwrap();
        let response = responder
            .evaluate_by_name("weather-condition-prediction", &RequestParams::new().with("temperature", 15.0))
            .unwrap();
        assert_eq!(response.value, Decision::Label("Mild"));
    }
}
