use actix_web::{web, HttpResponse, Responder};
use std::collections::HashMap;

use crate::core::{DecisionRule, ThresholdResponder, UnknownRule};
use crate::models::{params_from_json, params_from_query, RequestParams, RuleSummary, RulesResponse};
use crate::routes::{ApiError, AppState};

/// Rule bound to a resource at registration time
#[derive(Debug, Clone, Copy)]
pub struct SelectedRule(pub &'static DecisionRule);

/// Configure rule routes
///
/// Every catalog rule gets its own path, answering GET with the query string
/// and POST with a JSON body. The same rules are also reachable by name under
/// `/api/rules/{name}`.
pub fn configure(cfg: &mut web::ServiceConfig, responder: &ThresholdResponder) {
    cfg.route("/api/rules", web::get().to(list_rules)).service(
        web::resource("/api/rules/{name}")
            .route(web::get().to(evaluate_named_query))
            .route(web::post().to(evaluate_named_body)),
    );

    for rule in responder.rules() {
        tracing::debug!("Registering rule {} at {}", rule.name, rule.path);

        cfg.service(
            web::resource(rule.path)
                .app_data(web::Data::new(SelectedRule(rule)))
                .route(web::get().to(evaluate_query))
                .route(web::post().to(evaluate_body)),
        );
    }
}

/// GET /api/rules
async fn list_rules(state: web::Data<AppState>) -> impl Responder {
    let rules = state.responder.rules().iter().map(RuleSummary::from).collect();
    HttpResponse::Ok().json(RulesResponse { rules })
}

/// GET <rule path>?param=value
async fn evaluate_query(
    state: web::Data<AppState>,
    selected: web::Data<SelectedRule>,
    query: web::Query<HashMap<String, String>>,
) -> Result<HttpResponse, ApiError> {
    let rule = selected.0;
    let params = params_from_query(rule, &query).map_err(|e| reject(rule, e))?;
    Ok(respond(&state.responder, rule, &params))
}

/// POST <rule path> with a JSON object body
async fn evaluate_body(
    state: web::Data<AppState>,
    selected: web::Data<SelectedRule>,
    body: web::Bytes,
) -> Result<HttpResponse, ApiError> {
    let rule = selected.0;
    let params = params_from_json(rule, &body).map_err(|e| reject(rule, e))?;
    Ok(respond(&state.responder, rule, &params))
}

/// GET /api/rules/{name}?param=value
async fn evaluate_named_query(
    state: web::Data<AppState>,
    name: web::Path<String>,
    query: web::Query<HashMap<String, String>>,
) -> Result<HttpResponse, ApiError> {
    let rule = lookup(&state.responder, &name)?;
    let params = params_from_query(rule, &query).map_err(|e| reject(rule, e))?;
    Ok(respond(&state.responder, rule, &params))
}

/// POST /api/rules/{name} with a JSON object body
async fn evaluate_named_body(
    state: web::Data<AppState>,
    name: web::Path<String>,
    body: web::Bytes,
) -> Result<HttpResponse, ApiError> {
    let rule = lookup(&state.responder, &name)?;
    let params = params_from_json(rule, &body).map_err(|e| reject(rule, e))?;
    Ok(respond(&state.responder, rule, &params))
}

fn lookup(responder: &ThresholdResponder, name: &str) -> Result<&'static DecisionRule, ApiError> {
    responder.find(name).ok_or_else(|| {
        tracing::info!("Request for unknown rule {}", name);
        UnknownRule(name.to_string()).into()
    })
}

fn reject(rule: &DecisionRule, err: crate::models::InputValidationError) -> ApiError {
    tracing::info!("Rejected input for rule {}: {}", rule.name, err);
    err.into()
}

fn respond(responder: &ThresholdResponder, rule: &DecisionRule, params: &RequestParams) -> HttpResponse {
    HttpResponse::Ok().json(responder.evaluate(rule, params))
}
