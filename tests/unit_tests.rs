// Unit tests for Weather Rules

use weather_rules::core::catalog::{
    RAIN_PREDICTION, RECOMMENDATIONS, TEMPERATURE_PREDICTION, WEATHER_ALERT, WEATHER_CLUSTERING,
    WEATHER_CONDITION,
};
use weather_rules::core::{ThresholdResponder, CATALOG};
use weather_rules::models::{Decision, RequestParams};

fn humidity(h: f64) -> RequestParams {
    RequestParams::new().with("humidity", h)
}

fn temperature(t: f64) -> RequestParams {
    RequestParams::new().with("temperature", t)
}

fn weather(t: f64, h: f64) -> RequestParams {
    RequestParams::new().with("temperature", t).with("humidity", h)
}

fn number(decision: Decision) -> f64 {
    match decision {
        Decision::Number(value) => value,
        other => panic!("expected a number, got {:?}", other),
    }
}

#[test]
fn test_rain_prediction_threshold() {
    assert_eq!(RAIN_PREDICTION.decide(&humidity(80.0)), Decision::Label("Rain"));
    assert_eq!(RAIN_PREDICTION.decide(&humidity(20.0)), Decision::Label("No Rain"));
}

#[test]
fn test_rain_prediction_boundary() {
    assert_eq!(RAIN_PREDICTION.decide(&humidity(70.0)), Decision::Label("No Rain"));
    assert_eq!(RAIN_PREDICTION.decide(&humidity(70.0001)), Decision::Label("Rain"));
}

#[test]
fn test_rain_prediction_default() {
    // humidity defaults to 0
    assert_eq!(RAIN_PREDICTION.decide(&RequestParams::new()), Decision::Label("No Rain"));
}

#[test]
fn test_temperature_estimate_is_linear() {
    for h in [0.0, 12.5, 50.0, 80.0, 100.0, -10.0] {
        let estimate = number(TEMPERATURE_PREDICTION.decide(&humidity(h)));
        assert!((estimate - (0.8 * h + 20.0)).abs() < 1e-9, "h={} gave {}", h, estimate);
    }
}

#[test]
fn test_temperature_estimate_default() {
    let estimate = number(TEMPERATURE_PREDICTION.decide(&RequestParams::new()));
    assert!((estimate - 60.0).abs() < 1e-9);
}

#[test]
fn test_weather_alert() {
    assert_eq!(WEATHER_ALERT.decide(&weather(35.0, 30.0)), Decision::Label("Send Heat Alert"));
    assert_eq!(WEATHER_ALERT.decide(&weather(2.0, 80.0)), Decision::Label("Send Cold Alert"));
    assert_eq!(WEATHER_ALERT.decide(&weather(20.0, 50.0)), Decision::Label("No Action"));
}

#[test]
fn test_weather_alert_boundaries() {
    assert_eq!(WEATHER_ALERT.decide(&weather(30.0, 30.0)), Decision::Label("No Action"));
    assert_eq!(WEATHER_ALERT.decide(&weather(35.0, 40.0)), Decision::Label("No Action"));
    assert_eq!(WEATHER_ALERT.decide(&weather(5.0, 80.0)), Decision::Label("No Action"));
    assert_eq!(WEATHER_ALERT.decide(&weather(2.0, 70.0)), Decision::Label("No Action"));
}

#[test]
fn test_weather_alert_defaults() {
    // temperature 20, humidity 50
    assert_eq!(WEATHER_ALERT.decide(&RequestParams::new()), Decision::Label("No Action"));
    // humidity default 50 is not below 40
    assert_eq!(WEATHER_ALERT.decide(&temperature(35.0)), Decision::Label("No Action"));
    assert_eq!(WEATHER_ALERT.decide(&humidity(30.0).with("temperature", 31.0)), Decision::Label("Send Heat Alert"));
}

#[test]
fn test_weather_clustering() {
    assert_eq!(
        WEATHER_CLUSTERING.decide(&weather(10.0, 70.0)),
        Decision::Label("Cluster 1: Cold-Humid")
    );
    assert_eq!(
        WEATHER_CLUSTERING.decide(&weather(30.0, 20.0)),
        Decision::Label("Cluster 2: Hot-Dry")
    );
    assert_eq!(
        WEATHER_CLUSTERING.decide(&weather(20.0, 50.0)),
        Decision::Label("Cluster 3: Moderate")
    );
}

#[test]
fn test_weather_clustering_defaults() {
    // temperature 0, humidity 0: cold but dry
    assert_eq!(
        WEATHER_CLUSTERING.decide(&RequestParams::new()),
        Decision::Label("Cluster 3: Moderate")
    );
}

#[test]
fn test_weather_condition() {
    assert_eq!(WEATHER_CONDITION.decide(&temperature(5.0)), Decision::Label("Cold"));
    assert_eq!(WEATHER_CONDITION.decide(&temperature(15.0)), Decision::Label("Mild"));
    assert_eq!(WEATHER_CONDITION.decide(&temperature(30.0)), Decision::Label("Hot"));
}

#[test]
fn test_weather_condition_boundaries() {
    assert_eq!(WEATHER_CONDITION.decide(&temperature(10.0)), Decision::Label("Mild"));
    assert_eq!(WEATHER_CONDITION.decide(&temperature(25.0)), Decision::Label("Hot"));
    assert_eq!(WEATHER_CONDITION.decide(&RequestParams::new()), Decision::Label("Cold"));
}

#[test]
fn test_recommendations_are_fixed() {
    let expected = Decision::List(vec!["Movie 1", "Movie 2", "Movie 3"]);
    assert_eq!(RECOMMENDATIONS.decide(&RequestParams::new()), expected);
    assert_eq!(RECOMMENDATIONS.decide(&weather(99.0, 99.0)), expected);
}

#[test]
fn test_evaluation_is_deterministic() {
    let responder = ThresholdResponder::new(CATALOG).unwrap();
    let params = weather(12.0, 65.0);

    for rule in responder.rules() {
        let first = responder.evaluate(rule, &params);
        for _ in 0..10 {
            assert_eq!(responder.evaluate(rule, &params), first, "{} is not deterministic", rule.name);
        }
    }
}

#[test]
fn test_response_keys() {
    let responder = ThresholdResponder::new(CATALOG).unwrap();
    let keys: Vec<(&str, &str)> = responder
        .rules()
        .iter()
        .map(|rule| (rule.name, rule.response_key))
        .collect();

    assert!(keys.contains(&("rain-prediction", "prediction")));
    assert!(keys.contains(&("temperature-prediction", "prediction")));
    assert!(keys.contains(&("weather-alert", "action")));
    assert!(keys.contains(&("weather-clustering", "cluster")));
    assert!(keys.contains(&("weather-condition-prediction", "prediction")));
    assert!(keys.contains(&("recommendations", "recommendations")));
}
