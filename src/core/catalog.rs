use crate::core::rule::{Branch, Condition, DecisionRule, Outcome, ParamSpec};

/// Rain if the air is humid enough
pub const RAIN_PREDICTION: DecisionRule = DecisionRule {
    name: "rain-prediction",
    path: "/api/rain-prediction",
    response_key: "prediction",
    params: &[ParamSpec::new("humidity", 0.0)],
    branches: &[Branch {
        when: &[Condition::above("humidity", 70.0)],
        then: Outcome::Label("Rain"),
    }],
    fallback: Outcome::Label("No Rain"),
};

/// Linear temperature estimate from humidity
pub const TEMPERATURE_PREDICTION: DecisionRule = DecisionRule {
    name: "temperature-prediction",
    path: "/api/temperature-prediction",
    response_key: "prediction",
    params: &[ParamSpec::new("humidity", 50.0)],
    branches: &[],
    fallback: Outcome::Linear {
        param: "humidity",
        slope: 0.8,
        intercept: 20.0,
    },
};

pub const WEATHER_ALERT: DecisionRule = DecisionRule {
    name: "weather-alert",
    path: "/api/weather-alert",
    response_key: "action",
    params: &[
        ParamSpec::new("temperature", 20.0),
        ParamSpec::new("humidity", 50.0),
    ],
    branches: &[
        Branch {
            when: &[
                Condition::above("temperature", 30.0),
                Condition::below("humidity", 40.0),
            ],
            then: Outcome::Label("Send Heat Alert"),
        },
        Branch {
            when: &[
                Condition::below("temperature", 5.0),
                Condition::above("humidity", 70.0),
            ],
            then: Outcome::Label("Send Cold Alert"),
        },
    ],
    fallback: Outcome::Label("No Action"),
};

pub const WEATHER_CLUSTERING: DecisionRule = DecisionRule {
    name: "weather-clustering",
    path: "/api/weather-clustering",
    response_key: "cluster",
    params: &[
        ParamSpec::new("temperature", 0.0),
        ParamSpec::new("humidity", 0.0),
    ],
    branches: &[
        Branch {
            when: &[
                Condition::below("temperature", 15.0),
                Condition::above("humidity", 60.0),
            ],
            then: Outcome::Label("Cluster 1: Cold-Humid"),
        },
        Branch {
            when: &[
                Condition::above("temperature", 25.0),
                Condition::below("humidity", 50.0),
            ],
            then: Outcome::Label("Cluster 2: Hot-Dry"),
        },
    ],
    fallback: Outcome::Label("Cluster 3: Moderate"),
};

/// Cold / Mild / Hot bands; the second branch relies on the first having
/// already taken everything below 10.
pub const WEATHER_CONDITION: DecisionRule = DecisionRule {
    name: "weather-condition-prediction",
    path: "/api/weather-condition-prediction",
    response_key: "prediction",
    params: &[ParamSpec::new("temperature", 0.0)],
    branches: &[
        Branch {
            when: &[Condition::below("temperature", 10.0)],
            then: Outcome::Label("Cold"),
        },
        Branch {
            when: &[Condition::below("temperature", 25.0)],
            then: Outcome::Label("Mild"),
        },
    ],
    fallback: Outcome::Label("Hot"),
};

pub const RECOMMENDATIONS: DecisionRule = DecisionRule {
    name: "recommendations",
    path: "/recommendations",
    response_key: "recommendations",
    params: &[],
    branches: &[],
    fallback: Outcome::List(&["Movie 1", "Movie 2", "Movie 3"]),
};

/// Every rule the service exposes
pub static CATALOG: &[DecisionRule] = &[
    RAIN_PREDICTION,
    TEMPERATURE_PREDICTION,
    WEATHER_ALERT,
    WEATHER_CLUSTERING,
    WEATHER_CONDITION,
    RECOMMENDATIONS,
];
