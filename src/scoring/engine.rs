use crate::survey::AnswerSet;

/// Category 1, Digital Business Strategy: each response scaled by 3.33 and
/// summed. No clamping; out-of-range inputs pass through by design.
pub fn strategy(answers: &AnswerSet) -> f64 {
    (answers.invested * 3.33) + (answers.planned * 3.33) + (answers.preparedness * 3.33)
}

/// Category 2, Digital Readiness: the technology count is worth 5 points
/// each; the advanced-technology sliders are normalized to [0,1] (x0.2) and
/// scaled to a 0-50 contribution. The divisor is derived from the number of
/// advanced technologies rather than hard-coded.
pub fn readiness(answers: &AnswerSet) -> f64 {
    let advanced = answers.advanced_technologies();
    let adv_sum: f64 = advanced.iter().sum();
    (answers.technologies_in_use * 5.0) + (adv_sum * 0.2) * (10.0 / advanced.len() as f64) * 5.0
}

/// Category 3, Human-centric Digitilisation.
pub fn human_centric(answers: &AnswerSet) -> f64 {
    (answers.reskilling * 5.0) + (answers.adoption * 5.0)
}

/// Category 4, Data Management & Security.
pub fn data_management(answers: &AnswerSet) -> f64 {
    (answers.data_handling * 5.0) + (answers.data_security * 5.0)
}

/// Overall digital maturity: the arithmetic mean of the four category
/// scores.
pub fn overall(strategy: f64, readiness: f64, human_centric: f64, data_management: f64) -> f64 {
    (strategy + readiness + human_centric + data_management) / 4.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::survey::{RawAnswers, SurveyDefinition};

    fn answers_with(overrides: &[(&str, f64)]) -> AnswerSet {
        let mut raw: RawAnswers = AnswerSet::QUESTION_NAMES
            .iter()
            .map(|name| (name.to_string(), 0.0))
            .collect();
        for (name, value) in overrides {
            raw.insert(name.to_string(), *value);
        }
        AnswerSet::from_raw(&raw).unwrap()
    }

    #[test]
    fn test_all_zero_answers_score_zero() {
        let answers = answers_with(&[]);
        let c1 = strategy(&answers);
        let c2 = readiness(&answers);
        let c3 = human_centric(&answers);
        let c4 = data_management(&answers);
        assert_eq!(c1, 0.0);
        assert_eq!(c2, 0.0);
        assert_eq!(c3, 0.0);
        assert_eq!(c4, 0.0);
        assert_eq!(overall(c1, c2, c3, c4), 0.0);
    }

    #[test]
    fn test_strategy_reference_values() {
        // 3 x 10 x 3.33 = 99.9
        let answers = answers_with(&[("Q1ai", 10.0), ("Q1pi", 10.0), ("Q2_cat1", 10.0)]);
        assert!((strategy(&answers) - 99.9).abs() < 1e-9);
    }

    #[test]
    fn test_strategy_is_linear_per_input() {
        let base = answers_with(&[("Q1ai", 1.0)]);
        let scaled = answers_with(&[("Q1ai", 4.0)]);
        assert!((strategy(&scaled) - strategy(&base) * 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_readiness_maximum_is_one_hundred() {
        // Q3=10 and all seven sliders at 5: 10*5 + (35*0.2)*(10/7)*5 = 50 + 50
        let answers = answers_with(&[
            ("Q3", 10.0),
            ("Simulation", 5.0),
            ("VR_AR", 5.0),
            ("CAD_CAM", 5.0),
            ("MES", 5.0),
            ("IoT", 5.0),
            ("Blockchain", 5.0),
            ("Additive", 5.0),
        ]);
        assert!((readiness(&answers) - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_readiness_technology_count_alone() {
        let answers = answers_with(&[("Q3", 4.0)]);
        assert!((readiness(&answers) - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_readiness_single_slider_contribution() {
        // One slider at 5: (5*0.2)*(10/7)*5 = 50/7
        let answers = answers_with(&[("MES", 5.0)]);
        assert!((readiness(&answers) - 50.0 / 7.0).abs() < 1e-9);
    }

    #[test]
    fn test_slider_boundaries_accepted_without_clamping() {
        let at_min = answers_with(&[("Simulation", 0.0)]);
        let at_max = answers_with(&[("Simulation", 5.0)]);
        assert_eq!(readiness(&at_min), 0.0);
        assert!((readiness(&at_max) - 50.0 / 7.0).abs() < 1e-9);
    }

    #[test]
    fn test_human_centric_reference_value() {
        let answers = answers_with(&[("Q5_cat3", 10.0), ("Q6_cat3", 10.0)]);
        assert!((human_centric(&answers) - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_data_management_reference_value() {
        let answers = answers_with(&[("Q5_cat4", 10.0), ("Q6_cat4", 10.0)]);
        assert!((data_management(&answers) - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_human_centric_is_linear_per_input() {
        let base = answers_with(&[("Q6_cat3", 2.0)]);
        let scaled = answers_with(&[("Q6_cat3", 6.0)]);
        assert!((human_centric(&scaled) - human_centric(&base) * 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_overall_is_exact_mean() {
        assert_eq!(overall(10.0, 20.0, 30.0, 40.0), 25.0);
        assert_eq!(overall(0.0, 0.0, 0.0, 0.0), 0.0);
        assert_eq!(overall(-8.0, 8.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn test_out_of_range_inputs_pass_through() {
        // The engine does not clamp; 0-100 is nominal, not enforced.
        let answers = answers_with(&[("Q1ai", 100.0)]);
        assert!((strategy(&answers) - 333.0).abs() < 1e-9);
    }

    #[test]
    fn test_scoring_is_idempotent() {
        let answers = answers_with(&[("Q1ai", 3.0), ("Q3", 7.0), ("IoT", 2.0)]);
        assert_eq!(strategy(&answers), strategy(&answers));
        assert_eq!(readiness(&answers), readiness(&answers));
        assert_eq!(human_centric(&answers), human_centric(&answers));
        assert_eq!(data_management(&answers), data_management(&answers));
    }

    #[test]
    fn test_divisor_tracks_advanced_technology_count() {
        // The schema's slider list and the engine's advanced field list must
        // stay in lockstep; the 10/n scaling silently changes otherwise.
        let survey = SurveyDefinition::standard();
        assert_eq!(
            survey.slider_names(),
            AnswerSet::ADVANCED_TECHNOLOGIES.to_vec()
        );
        let answers = answers_with(&[]);
        assert_eq!(
            answers.advanced_technologies().len(),
            AnswerSet::ADVANCED_TECHNOLOGIES.len()
        );
    }
}
