use std::collections::HashSet;

use crate::survey::{AnswerSet, InputKind, SurveyDefinition};

/// Validate the survey definition at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_survey(survey: &SurveyDefinition) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    for category in &survey.categories {
        if category.questions.is_empty() {
            errors.push(format!("{}: category has no questions", category.name));
        }
    }

    let mut seen = HashSet::new();
    for question in survey.questions() {
        if !seen.insert(question.name) {
            errors.push(format!("{}: duplicate question name", question.name));
        }

        match question.kind {
            InputKind::Slider { min, max, default } => {
                if min > max {
                    errors.push(format!(
                        "{}: slider bounds inverted ({} > {})",
                        question.name, min, max
                    ));
                } else if default < min || default > max {
                    errors.push(format!(
                        "{}: default {} outside slider bounds [{}, {}]",
                        question.name, default, min, max
                    ));
                }
            }
            InputKind::Numeric { default } => {
                if !default.is_finite() {
                    errors.push(format!("{}: default is not a finite number", question.name));
                }
            }
        }
    }

    // The engine's answer fields and the schema must cover each other
    // exactly; a mismatch either way surfaces as a runtime MissingAnswer.
    let schema_names: HashSet<&str> = survey.questions().map(|q| q.name).collect();
    for name in AnswerSet::QUESTION_NAMES {
        if !schema_names.contains(name) {
            errors.push(format!(
                "{}: required by the scoring engine but missing from the survey",
                name
            ));
        }
    }
    for question in survey.questions() {
        if !AnswerSet::QUESTION_NAMES.contains(&question.name) {
            errors.push(format!(
                "{}: not consumed by any scoring engine field",
                question.name
            ));
        }
    }

    // The readiness divisor is the advanced-technology count; the slider
    // list must match the engine's field list in content and order.
    let sliders = survey.slider_names();
    if sliders != AnswerSet::ADVANCED_TECHNOLOGIES.to_vec() {
        errors.push(format!(
            "advanced technology sliders {:?} do not match the scoring engine's {:?}",
            sliders,
            AnswerSet::ADVANCED_TECHNOLOGIES
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
