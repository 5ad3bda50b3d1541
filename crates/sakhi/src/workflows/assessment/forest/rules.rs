use serde::Serialize;

/// Single threshold stump: emits `left_score` when the feature is at or below
/// `threshold`, `right_score` otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RiskRule {
    pub feature: &'static str,
    pub threshold: f64,
    pub left_score: f64,
    pub right_score: f64,
}

impl RiskRule {
    pub const fn new(
        feature: &'static str,
        threshold: f64,
        left_score: f64,
        right_score: f64,
    ) -> Self {
        Self {
            feature,
            threshold,
            left_score,
            right_score,
        }
    }

    pub fn emit(&self, value: f64) -> f64 {
        if value <= self.threshold {
            self.left_score
        } else {
            self.right_score
        }
    }
}

/// Named group of stumps whose prediction is the mean of its emitted scores.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RiskTree {
    pub name: &'static str,
    pub rules: &'static [RiskRule],
}

pub const STANDARD_TREES: &[RiskTree] = &[
    RiskTree {
        name: "menstrual_metabolic",
        rules: &[
            RiskRule::new("q1_score", 2.0, 0.10, 0.40),
            RiskRule::new("q8_score", 2.0, 0.15, 0.50),
            RiskRule::new("q5_score", 2.0, 0.20, 0.45),
        ],
    },
    RiskTree {
        name: "physical_symptoms",
        rules: &[
            RiskRule::new("q3_score", 2.0, 0.10, 0.35),
            RiskRule::new("q4_score", 1.5, 0.15, 0.30),
            RiskRule::new("q6_score", 2.0, 0.10, 0.35),
        ],
    },
    RiskTree {
        name: "combined",
        rules: &[
            RiskRule::new("q1_score", 3.0, 0.15, 0.50),
            RiskRule::new("q3_score", 2.0, 0.20, 0.40),
            RiskRule::new("q7_score", 1.0, 0.15, 0.45),
        ],
    },
    RiskTree {
        name: "family_lifestyle",
        rules: &[
            RiskRule::new("q9_score", 1.5, 0.10, 0.30),
            RiskRule::new("q10_score", 1.5, 0.10, 0.25),
            RiskRule::new("q11_score", 1.5, 0.10, 0.30),
        ],
    },
    RiskTree {
        name: "metabolic_syndrome",
        rules: &[
            RiskRule::new("q5_score", 2.0, 0.15, 0.45),
            RiskRule::new("q8_score", 3.0, 0.20, 0.60),
            RiskRule::new("q12_score", 1.5, 0.15, 0.35),
        ],
    },
    RiskTree {
        name: "hyperandrogenism",
        rules: &[
            RiskRule::new("q3_score", 3.0, 0.15, 0.50),
            RiskRule::new("q4_score", 2.0, 0.10, 0.40),
            RiskRule::new("q6_score", 2.0, 0.15, 0.40),
        ],
    },
];
