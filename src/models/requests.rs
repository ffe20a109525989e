use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

use crate::core::DecisionRule;
use crate::models::RequestParams;

/// Rejected request input
#[derive(Debug, Error, PartialEq)]
pub enum InputValidationError {
    #[error("Parameter {name} is not a number: {value}")]
    NotNumeric { name: String, value: String },

    #[error("Parameter {name} must be a finite number")]
    NotFinite { name: String },

    #[error("Request body must be a JSON object")]
    NotAnObject,

    #[error("Invalid JSON: {0}")]
    InvalidJson(String),
}

/// Parse the declared parameters of `rule` out of a query string map
///
/// Values are parsed as `f64`. Undeclared keys are ignored, so unrelated
/// query arguments never fail a request.
pub fn params_from_query(
    rule: &DecisionRule,
    query: &HashMap<String, String>,
) -> Result<RequestParams, InputValidationError> {
    let mut params = RequestParams::new();

    for spec in rule.params {
        let Some(raw) = query.get(spec.name) else {
            continue;
        };

        let value: f64 = raw.trim().parse().map_err(|_| InputValidationError::NotNumeric {
            name: spec.name.to_string(),
            value: raw.clone(),
        })?;

        params.insert(spec.name, ensure_finite(spec.name, value)?);
    }

    Ok(params)
}

/// Parse the declared parameters of `rule` out of a JSON request body
///
/// An empty body is treated as "no parameters", and the body is not read at
/// all for rules without inputs. Only JSON numbers are accepted; `null`
/// counts as absent.
pub fn params_from_json(
    rule: &DecisionRule,
    body: &[u8],
) -> Result<RequestParams, InputValidationError> {
    if rule.params.is_empty() || body.iter().all(u8::is_ascii_whitespace) {
        return Ok(RequestParams::new());
    }

    let document: Value = serde_json::from_slice(body)
        .map_err(|e| InputValidationError::InvalidJson(e.to_string()))?;

    let object = document.as_object().ok_or(InputValidationError::NotAnObject)?;

    let mut params = RequestParams::new();

    for spec in rule.params {
        match object.get(spec.name) {
            None | Some(Value::Null) => {}
            Some(Value::Number(number)) => {
                let value = number.as_f64().ok_or_else(|| InputValidationError::NotFinite {
                    name: spec.name.to_string(),
                })?;
                params.insert(spec.name, ensure_finite(spec.name, value)?);
            }
            Some(other) => {
                return Err(InputValidationError::NotNumeric {
                    name: spec.name.to_string(),
                    value: other.to_string(),
                });
            }
        }
    }

    Ok(params)
}

#[inline]
fn ensure_finite(name: &str, value: f64) -> Result<f64, InputValidationError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(InputValidationError::NotFinite { name: name.to_string() })
    }
}
