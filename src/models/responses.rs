use serde::{Deserialize, Serialize};
use crate::core::DecisionRule;

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub rules: usize,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

/// Response for the root endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WelcomeResponse {
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParamSummary {
    pub name: String,
    pub default: f64,
}

/// Human-readable description of a catalog rule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleSummary {
    pub name: String,
    pub path: String,
    #[serde(rename = "responseKey")]
    pub response_key: String,
    pub params: Vec<ParamSummary>,
    pub branches: Vec<String>,
    pub fallback: String,
}

impl From<&DecisionRule> for RuleSummary {
    fn from(rule: &DecisionRule) -> Self {
        Self {
            name: rule.name.to_string(),
            path: rule.path.to_string(),
            response_key: rule.response_key.to_string(),
            params: rule
                .params
                .iter()
                .map(|spec| ParamSummary {
                    name: spec.name.to_string(),
                    default: spec.default,
                })
                .collect(),
            branches: rule.branches.iter().map(|branch| branch.to_string()).collect(),
            fallback: rule.fallback.to_string(),
        }
    }
}

/// Response for the catalog listing endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RulesResponse {
    pub rules: Vec<RuleSummary>,
}
