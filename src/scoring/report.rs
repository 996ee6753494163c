use serde::Serialize;

use super::engine;
use crate::survey::AnswerSet;

/// The four category scores plus their average, produced by one scoring
/// pass. Values are full-precision; rounding to one decimal happens at the
/// display layer only.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreReport {
    pub strategy: f64,
    pub readiness: f64,
    pub human_centric: f64,
    pub data_management: f64,
    pub overall: f64,
}

impl ScoreReport {
    pub fn from_answers(answers: &AnswerSet) -> Self {
        let strategy = engine::strategy(answers);
        let readiness = engine::readiness(answers);
        let human_centric = engine::human_centric(answers);
        let data_management = engine::data_management(answers);
        let overall = engine::overall(strategy, readiness, human_centric, data_management);
        Self {
            strategy,
            readiness,
            human_centric,
            data_management,
            overall,
        }
    }

    /// Category scores with display titles, in survey order.
    pub fn categories(&self) -> [(&'static str, f64); 4] {
        [
            ("Category 1: Digital Business Strategy", self.strategy),
            ("Category 2: Digital Readiness", self.readiness),
            ("Category 3: Human-centric Digitilisation", self.human_centric),
            ("Category 4: Data Management & Security", self.data_management),
        ]
    }
}

/// Gauge color band for a 0-100 score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Band {
    /// [0, 25) -- red.
    Nascent,
    /// [25, 50) -- orange.
    Developing,
    /// [50, 75) -- yellow.
    Maturing,
    /// [75, 100] -- green.
    Leading,
}

impl Band {
    /// Scores outside the nominal range fall into the outer bands; this is a
    /// display classification, the underlying score is untouched.
    pub fn for_score(score: f64) -> Self {
        if score < 25.0 {
            Band::Nascent
        } else if score < 50.0 {
            Band::Developing
        } else if score < 75.0 {
            Band::Maturing
        } else {
            Band::Leading
        }
    }
}
