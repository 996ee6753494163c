use std::time::Instant;

use crate::scoring::ScoreReport;
use crate::survey::{AnswerSet, InputKind, Question, RawAnswers, SurveyDefinition};
use crate::tui::theme::ThemeColors;

#[derive(Debug, Clone, PartialEq)]
pub enum View {
    Form,
    Results,
}

#[derive(Debug, Clone, PartialEq)]
pub enum InputMode {
    Normal,
    Editing,
    Help,
}

/// The current value of one form input.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Free numeric entry, kept as text until scoring so in-progress input
    /// like "3." stays representable.
    Numeric { text: String },
    /// Bounded value stepped by 1 between min and max.
    Slider { value: f64, min: f64, max: f64 },
}

/// One focusable form input, flattened from the survey definition.
#[derive(Debug, Clone)]
pub struct Field {
    pub category: usize,
    pub question: usize,
    pub value: FieldValue,
}

pub struct App {
    pub survey: SurveyDefinition,
    pub fields: Vec<Field>,
    pub selected: usize,
    pub table_state: ratatui::widgets::TableState,
    pub view: View,
    pub input_mode: InputMode,
    pub edit_buffer: String,
    pub report: Option<ScoreReport>,
    pub flash_message: Option<(String, Instant)>,
    pub theme: ThemeColors,
    pub should_quit: bool,
}

impl App {
    pub fn new(survey: SurveyDefinition, theme: ThemeColors) -> Self {
        let fields = flatten_fields(&survey);
        let mut table_state = ratatui::widgets::TableState::default();
        if !fields.is_empty() {
            table_state.select(Some(row_index(&fields, 0)));
        }

        Self {
            survey,
            fields,
            selected: 0,
            table_state,
            view: View::Form,
            input_mode: InputMode::Normal,
            edit_buffer: String::new(),
            report: None,
            flash_message: None,
            theme,
            should_quit: false,
        }
    }

    pub fn selected_field(&self) -> Option<&Field> {
        self.fields.get(self.selected)
    }

    pub fn question_for(&self, field: &Field) -> &Question {
        &self.survey.categories[field.category].questions[field.question]
    }

    pub fn selected_question(&self) -> Option<&Question> {
        self.selected_field().map(|f| self.question_for(f))
    }

    /// The table row a field renders at: one header row precedes each
    /// category's questions.
    pub fn row_of(&self, field_index: usize) -> usize {
        row_index(&self.fields, field_index)
    }

    fn select(&mut self, index: usize) {
        self.selected = index;
        self.table_state.select(Some(self.row_of(index)));
    }

    pub fn next_field(&mut self) {
        if self.fields.is_empty() {
            return;
        }
        let next = if self.selected >= self.fields.len() - 1 {
            0
        } else {
            self.selected + 1
        };
        self.select(next);
    }

    pub fn previous_field(&mut self) {
        if self.fields.is_empty() {
            return;
        }
        let previous = if self.selected == 0 {
            self.fields.len() - 1
        } else {
            self.selected - 1
        };
        self.select(previous);
    }

    /// Step the selected slider, clamping to its declared bounds. No-op on
    /// numeric fields.
    pub fn adjust_slider(&mut self, delta: f64) {
        if let Some(field) = self.fields.get_mut(self.selected) {
            if let FieldValue::Slider { value, min, max } = &mut field.value {
                *value = (*value + delta).clamp(*min, *max);
            }
        }
    }

    /// Begin editing the selected numeric field. Sliders are adjusted in
    /// place and never enter edit mode.
    pub fn start_edit(&mut self) {
        if let Some(field) = self.selected_field() {
            if let FieldValue::Numeric { text } = &field.value {
                self.edit_buffer = text.clone();
                self.input_mode = InputMode::Editing;
            }
        }
    }

    pub fn push_edit_char(&mut self, c: char) {
        if c.is_ascii_digit() || c == '.' {
            self.edit_buffer.push(c);
        }
    }

    pub fn pop_edit_char(&mut self) {
        self.edit_buffer.pop();
    }

    /// Commit the edit buffer to the selected field. Text that does not
    /// parse as a finite number is rejected with a flash and the previous
    /// value is kept.
    pub fn commit_edit(&mut self) {
        let input = self.edit_buffer.trim().to_string();
        self.input_mode = InputMode::Normal;
        self.edit_buffer.clear();

        match input.parse::<f64>() {
            Ok(value) if value.is_finite() => {
                if let Some(field) = self.fields.get_mut(self.selected) {
                    if let FieldValue::Numeric { text } = &mut field.value {
                        *text = input;
                    }
                }
            }
            _ => {
                self.show_flash(format!("Invalid number: '{}'", input));
            }
        }
    }

    pub fn cancel_edit(&mut self) {
        self.input_mode = InputMode::Normal;
        self.edit_buffer.clear();
    }

    /// Reset every field to its schema default (demo mode).
    pub fn fill_defaults(&mut self) {
        for field in &mut self.fields {
            let kind = self.survey.categories[field.category].questions[field.question].kind;
            field.value = initial_value(kind);
        }
        self.show_flash("Demo values loaded".to_string());
    }

    /// Collect the form into a raw answer mapping. Numeric text that does
    /// not parse aborts the submission, naming the question.
    pub fn raw_answers(&self) -> Result<RawAnswers, String> {
        let mut raw = RawAnswers::new();
        for field in &self.fields {
            let question = self.question_for(field);
            let value = match &field.value {
                FieldValue::Slider { value, .. } => *value,
                FieldValue::Numeric { text } => match text.trim().parse::<f64>() {
                    Ok(v) if v.is_finite() => v,
                    _ => {
                        return Err(format!(
                            "Invalid answer '{}' for {}",
                            text.trim(),
                            question.name
                        ))
                    }
                },
            };
            raw.insert(question.name.to_string(), value);
        }
        Ok(raw)
    }

    /// Run the scoring pass and switch to the results view. Failures flash
    /// the offending question and leave the form untouched.
    pub fn calculate(&mut self) {
        let raw = match self.raw_answers() {
            Ok(raw) => raw,
            Err(msg) => {
                self.show_flash(msg);
                return;
            }
        };

        match AnswerSet::from_raw(&raw) {
            Ok(answers) => {
                self.report = Some(ScoreReport::from_answers(&answers));
                self.view = View::Results;
                self.show_flash("Scores computed".to_string());
            }
            Err(e) => self.show_flash(format!("Cannot score: {}", e)),
        }
    }

    /// Return to the form with all answers intact.
    pub fn back_to_form(&mut self) {
        self.view = View::Form;
    }

    pub fn show_help(&mut self) {
        self.input_mode = InputMode::Help;
    }

    pub fn dismiss_help(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn show_flash(&mut self, msg: String) {
        self.flash_message = Some((msg, Instant::now()));
    }

    pub fn update_flash(&mut self) {
        if let Some((_, timestamp)) = self.flash_message {
            if timestamp.elapsed().as_secs() >= 3 {
                self.flash_message = None;
            }
        }
    }
}

fn initial_value(kind: InputKind) -> FieldValue {
    match kind {
        InputKind::Numeric { default } => FieldValue::Numeric {
            text: format_number(default),
        },
        InputKind::Slider { min, max, default } => FieldValue::Slider {
            value: default.clamp(min, max),
            min,
            max,
        },
    }
}

fn flatten_fields(survey: &SurveyDefinition) -> Vec<Field> {
    let mut fields = Vec::new();
    for (ci, category) in survey.categories.iter().enumerate() {
        for (qi, question) in category.questions.iter().enumerate() {
            fields.push(Field {
                category: ci,
                question: qi,
                value: initial_value(question.kind),
            });
        }
    }
    fields
}

fn row_index(fields: &[Field], field_index: usize) -> usize {
    // One header row per category up to and including this field's category.
    field_index + fields[field_index].category + 1
}

/// Format a number without a trailing ".0" for whole values.
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new(SurveyDefinition::standard(), ThemeColors::dark())
    }

    #[test]
    fn test_new_selects_first_field() {
        let app = app();
        assert_eq!(app.fields.len(), 15);
        assert_eq!(app.selected, 0);
        // Row 0 is the first category header.
        assert_eq!(app.table_state.selected(), Some(1));
        assert_eq!(app.selected_question().unwrap().name, "Q1ai");
    }

    #[test]
    fn test_navigation_wraps() {
        let mut app = app();
        app.previous_field();
        assert_eq!(app.selected, app.fields.len() - 1);
        app.next_field();
        assert_eq!(app.selected, 0);
    }

    #[test]
    fn test_row_accounts_for_category_headers() {
        let app = app();
        // Q3 is the first question of the second category: 3 question rows
        // and 2 header rows precede it.
        let q3_index = app
            .fields
            .iter()
            .position(|f| app.question_for(f).name == "Q3")
            .unwrap();
        assert_eq!(app.row_of(q3_index), q3_index + 2);
    }

    #[test]
    fn test_adjust_slider_clamps_to_bounds() {
        let mut app = app();
        let slider_index = app
            .fields
            .iter()
            .position(|f| matches!(f.value, FieldValue::Slider { .. }))
            .unwrap();
        app.select(slider_index);

        app.adjust_slider(-1.0);
        assert_eq!(
            app.fields[slider_index].value,
            FieldValue::Slider { value: 0.0, min: 0.0, max: 5.0 }
        );

        for _ in 0..10 {
            app.adjust_slider(1.0);
        }
        assert_eq!(
            app.fields[slider_index].value,
            FieldValue::Slider { value: 5.0, min: 0.0, max: 5.0 }
        );
    }

    #[test]
    fn test_adjust_slider_ignores_numeric_fields() {
        let mut app = app();
        app.adjust_slider(1.0);
        assert_eq!(
            app.fields[0].value,
            FieldValue::Numeric { text: "0".to_string() }
        );
    }

    #[test]
    fn test_edit_commit_updates_value() {
        let mut app = app();
        app.start_edit();
        assert_eq!(app.input_mode, InputMode::Editing);
        app.edit_buffer.clear();
        for c in "7.5".chars() {
            app.push_edit_char(c);
        }
        app.commit_edit();
        assert_eq!(app.input_mode, InputMode::Normal);
        assert_eq!(
            app.fields[0].value,
            FieldValue::Numeric { text: "7.5".to_string() }
        );
    }

    #[test]
    fn test_edit_rejects_letters_at_input() {
        let mut app = app();
        app.start_edit();
        app.push_edit_char('x');
        app.push_edit_char('3');
        assert_eq!(app.edit_buffer, "03");
    }

    #[test]
    fn test_edit_invalid_keeps_previous_value() {
        let mut app = app();
        app.start_edit();
        app.edit_buffer = "1.2.3".to_string();
        app.commit_edit();
        assert_eq!(
            app.fields[0].value,
            FieldValue::Numeric { text: "0".to_string() }
        );
        assert!(app.flash_message.is_some());
    }

    #[test]
    fn test_edit_cancel_restores_normal_mode() {
        let mut app = app();
        app.start_edit();
        app.push_edit_char('9');
        app.cancel_edit();
        assert_eq!(app.input_mode, InputMode::Normal);
        assert_eq!(
            app.fields[0].value,
            FieldValue::Numeric { text: "0".to_string() }
        );
    }

    #[test]
    fn test_start_edit_ignores_sliders() {
        let mut app = app();
        let slider_index = app
            .fields
            .iter()
            .position(|f| matches!(f.value, FieldValue::Slider { .. }))
            .unwrap();
        app.select(slider_index);
        app.start_edit();
        assert_eq!(app.input_mode, InputMode::Normal);
    }

    #[test]
    fn test_calculate_with_defaults_scores_zero() {
        let mut app = app();
        app.calculate();
        assert_eq!(app.view, View::Results);
        let report = app.report.unwrap();
        assert_eq!(report.overall, 0.0);
    }

    #[test]
    fn test_calculate_rejects_bad_numeric_text() {
        let mut app = app();
        app.fields[0].value = FieldValue::Numeric { text: "".to_string() };
        app.calculate();
        assert_eq!(app.view, View::Form);
        assert!(app.report.is_none());
        let (msg, _) = app.flash_message.as_ref().unwrap();
        assert!(msg.contains("Q1ai"));
    }

    #[test]
    fn test_calculate_full_flow() {
        let mut app = app();
        // Q2_cat1 = 10, both human-centric answers = 10
        app.fields[2].value = FieldValue::Numeric { text: "10".to_string() };
        for field in app.fields.iter_mut() {
            if field.category == 2 {
                field.value = FieldValue::Numeric { text: "10".to_string() };
            }
        }
        app.calculate();
        let report = app.report.unwrap();
        assert!((report.strategy - 33.3).abs() < 1e-9);
        assert!((report.human_centric - 100.0).abs() < 1e-9);
        assert!((report.overall - 133.3 / 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_back_to_form_keeps_answers() {
        let mut app = app();
        app.fields[2].value = FieldValue::Numeric { text: "4".to_string() };
        app.calculate();
        app.back_to_form();
        assert_eq!(app.view, View::Form);
        assert_eq!(
            app.fields[2].value,
            FieldValue::Numeric { text: "4".to_string() }
        );
    }

    #[test]
    fn test_fill_defaults_resets_fields() {
        let mut app = app();
        app.fields[0].value = FieldValue::Numeric { text: "9".to_string() };
        let slider_index = app
            .fields
            .iter()
            .position(|f| matches!(f.value, FieldValue::Slider { .. }))
            .unwrap();
        app.fields[slider_index].value = FieldValue::Slider { value: 4.0, min: 0.0, max: 5.0 };

        app.fill_defaults();
        assert_eq!(
            app.fields[0].value,
            FieldValue::Numeric { text: "0".to_string() }
        );
        assert_eq!(
            app.fields[slider_index].value,
            FieldValue::Slider { value: 0.0, min: 0.0, max: 5.0 }
        );
    }

    #[test]
    fn test_raw_answers_covers_every_question() {
        let app = app();
        let raw = app.raw_answers().unwrap();
        assert_eq!(raw.len(), 15);
        for name in AnswerSet::QUESTION_NAMES {
            assert!(raw.contains_key(name));
        }
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(5.0), "5");
        assert_eq!(format_number(2.5), "2.5");
    }
}
