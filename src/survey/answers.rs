use anyhow::{Context, Result};
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::Path;

use super::schema::SurveyDefinition;

/// Raw name-to-value answers as collected from an input boundary (the TUI
/// form or a YAML answers file), before validation.
pub type RawAnswers = HashMap<String, f64>;

/// Why a raw answer mapping could not be turned into an [`AnswerSet`].
///
/// The engine never substitutes zero for a bad answer; the submission is
/// aborted and the caller is told which question failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerError {
    Missing { question: &'static str },
    NotFinite { question: &'static str },
}

impl fmt::Display for AnswerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnswerError::Missing { question } => {
                write!(f, "missing answer for question '{}'", question)
            }
            AnswerError::NotFinite { question } => {
                write!(f, "answer for question '{}' is not a finite number", question)
            }
        }
    }
}

impl std::error::Error for AnswerError {}

/// The complete set of numeric responses for one survey submission.
///
/// One named field per question, so a typo'd answer key is a compile error
/// rather than a runtime lookup failure. Built fresh per submission and
/// discarded after scoring; nothing is persisted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnswerSet {
    /// Q1ai -- investments already made (count).
    pub invested: f64,
    /// Q1pi -- investments planned (count).
    pub planned: f64,
    /// Q2_cat1 -- preparedness score, 0-10.
    pub preparedness: f64,
    /// Q3 -- count of digital technologies already in use.
    pub technologies_in_use: f64,
    pub simulation: f64,
    pub vr_ar: f64,
    pub cad_cam: f64,
    pub mes: f64,
    pub iot: f64,
    pub blockchain: f64,
    pub additive: f64,
    /// Q5_cat3 -- staff re-skilling and up-skilling.
    pub reskilling: f64,
    /// Q6_cat3 -- adoption of new digital solutions.
    pub adoption: f64,
    /// Q5_cat4 -- how data is managed.
    pub data_handling: f64,
    /// Q6_cat4 -- whether data is secured.
    pub data_security: f64,
}

impl AnswerSet {
    /// Every question name the scoring engine requires, in survey order.
    pub const QUESTION_NAMES: [&'static str; 15] = [
        "Q1ai", "Q1pi", "Q2_cat1", "Q3", "Simulation", "VR_AR", "CAD_CAM", "MES", "IoT",
        "Blockchain", "Additive", "Q5_cat3", "Q6_cat3", "Q5_cat4", "Q6_cat4",
    ];

    /// The advanced-technology sliders feeding the readiness formula.
    pub const ADVANCED_TECHNOLOGIES: [&'static str; 7] =
        ["Simulation", "VR_AR", "CAD_CAM", "MES", "IoT", "Blockchain", "Additive"];

    /// Validate a raw answer mapping into a typed set. Fails on the first
    /// missing or non-finite entry, naming the question.
    pub fn from_raw(raw: &RawAnswers) -> Result<Self, AnswerError> {
        Ok(Self {
            invested: get(raw, "Q1ai")?,
            planned: get(raw, "Q1pi")?,
            preparedness: get(raw, "Q2_cat1")?,
            technologies_in_use: get(raw, "Q3")?,
            simulation: get(raw, "Simulation")?,
            vr_ar: get(raw, "VR_AR")?,
            cad_cam: get(raw, "CAD_CAM")?,
            mes: get(raw, "MES")?,
            iot: get(raw, "IoT")?,
            blockchain: get(raw, "Blockchain")?,
            additive: get(raw, "Additive")?,
            reskilling: get(raw, "Q5_cat3")?,
            adoption: get(raw, "Q6_cat3")?,
            data_handling: get(raw, "Q5_cat4")?,
            data_security: get(raw, "Q6_cat4")?,
        })
    }

    /// The demo answer set: every question at its schema default.
    pub fn defaults(survey: &SurveyDefinition) -> Result<Self, AnswerError> {
        let raw: RawAnswers = survey
            .questions()
            .map(|q| (q.name.to_string(), q.kind.default_value()))
            .collect();
        Self::from_raw(&raw)
    }

    /// The seven advanced-technology slider values, in survey order. The
    /// readiness formula derives its divisor from this array's length so the
    /// schema and the formula cannot drift apart silently.
    pub fn advanced_technologies(&self) -> [f64; 7] {
        [
            self.simulation,
            self.vr_ar,
            self.cad_cam,
            self.mes,
            self.iot,
            self.blockchain,
            self.additive,
        ]
    }
}

fn get(raw: &RawAnswers, question: &'static str) -> Result<f64, AnswerError> {
    match raw.get(question) {
        None => Err(AnswerError::Missing { question }),
        Some(value) if !value.is_finite() => Err(AnswerError::NotFinite { question }),
        Some(value) => Ok(*value),
    }
}

/// Parse a YAML mapping of question name to numeric answer.
pub fn parse_raw_answers(content: &str) -> Result<RawAnswers> {
    serde_saphyr::from_str(content).context("Failed to parse answers: expected a YAML mapping of question name to number")
}

/// Load raw answers from a YAML file.
///
/// The file is an input channel, not storage: it is read once, scored, and
/// nothing is ever written back.
pub fn load_raw_answers(path: &Path) -> Result<RawAnswers> {
    if !path.exists() {
        anyhow::bail!("Answers file not found at {}", path.display());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read answers file at {}", path.display()))?;

    parse_raw_answers(&content)
        .with_context(|| format!("Invalid answers file at {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_raw(value: f64) -> RawAnswers {
        AnswerSet::QUESTION_NAMES
            .iter()
            .map(|name| (name.to_string(), value))
            .collect()
    }

    #[test]
    fn test_from_raw_complete() {
        let answers = AnswerSet::from_raw(&complete_raw(2.0)).unwrap();
        assert_eq!(answers.invested, 2.0);
        assert_eq!(answers.blockchain, 2.0);
        assert_eq!(answers.data_security, 2.0);
    }

    #[test]
    fn test_from_raw_missing_names_question() {
        let mut raw = complete_raw(1.0);
        raw.remove("Q5_cat3");
        let err = AnswerSet::from_raw(&raw).unwrap_err();
        assert_eq!(err, AnswerError::Missing { question: "Q5_cat3" });
        assert!(err.to_string().contains("Q5_cat3"));
    }

    #[test]
    fn test_from_raw_rejects_nan() {
        let mut raw = complete_raw(1.0);
        raw.insert("IoT".to_string(), f64::NAN);
        let err = AnswerSet::from_raw(&raw).unwrap_err();
        assert_eq!(err, AnswerError::NotFinite { question: "IoT" });
    }

    #[test]
    fn test_from_raw_rejects_infinity() {
        let mut raw = complete_raw(1.0);
        raw.insert("Q3".to_string(), f64::INFINITY);
        let err = AnswerSet::from_raw(&raw).unwrap_err();
        assert_eq!(err, AnswerError::NotFinite { question: "Q3" });
    }

    #[test]
    fn test_from_raw_ignores_extra_keys() {
        let mut raw = complete_raw(1.0);
        raw.insert("Unrelated".to_string(), 99.0);
        assert!(AnswerSet::from_raw(&raw).is_ok());
    }

    #[test]
    fn test_defaults_are_all_zero() {
        let survey = crate::survey::SurveyDefinition::standard();
        let answers = AnswerSet::defaults(&survey).unwrap();
        assert_eq!(answers, AnswerSet::from_raw(&complete_raw(0.0)).unwrap());
    }

    #[test]
    fn test_advanced_technologies_order() {
        let mut raw = complete_raw(0.0);
        raw.insert("Simulation".to_string(), 1.0);
        raw.insert("Additive".to_string(), 5.0);
        let answers = AnswerSet::from_raw(&raw).unwrap();
        let advanced = answers.advanced_technologies();
        assert_eq!(advanced.len(), AnswerSet::ADVANCED_TECHNOLOGIES.len());
        assert_eq!(advanced[0], 1.0);
        assert_eq!(advanced[6], 5.0);
    }

    #[test]
    fn test_parse_raw_answers_yaml() {
        let yaml = r#"
Q1ai: 2
Q1pi: 3.5
Simulation: 4
"#;
        let raw = parse_raw_answers(yaml).unwrap();
        assert_eq!(raw.get("Q1ai"), Some(&2.0));
        assert_eq!(raw.get("Q1pi"), Some(&3.5));
        assert_eq!(raw.get("Simulation"), Some(&4.0));
    }

    #[test]
    fn test_parse_raw_answers_rejects_non_numeric() {
        let yaml = "Q1ai: lots";
        assert!(parse_raw_answers(yaml).is_err());
    }

    #[test]
    fn test_question_names_match_standard_schema() {
        let survey = crate::survey::SurveyDefinition::standard();
        let schema_names: Vec<&str> = survey.questions().map(|q| q.name).collect();
        assert_eq!(schema_names, AnswerSet::QUESTION_NAMES);
    }
}
