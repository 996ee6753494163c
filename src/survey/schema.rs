/// How a question collects its value.
///
/// Sliders always carry bounds; free numeric entry only carries a default.
/// Keeping these as separate variants means a slider without bounds is
/// unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputKind {
    /// Free numeric entry (counts and 0-10 ratings).
    Numeric { default: f64 },

    /// Bounded value stepped by whole numbers between `min` and `max`
    /// inclusive.
    Slider { min: f64, max: f64, default: f64 },
}

impl InputKind {
    pub fn default_value(&self) -> f64 {
        match *self {
            InputKind::Numeric { default } => default,
            InputKind::Slider { default, .. } => default,
        }
    }

    /// Declared bounds, sliders only.
    pub fn bounds(&self) -> Option<(f64, f64)> {
        match *self {
            InputKind::Numeric { .. } => None,
            InputKind::Slider { min, max, .. } => Some((min, max)),
        }
    }

    /// Clamp a value into the declared bounds. Numeric inputs pass through
    /// unchanged; bounds enforcement is an input-widget concern and the
    /// scoring engine never re-validates.
    pub fn clamp(&self, value: f64) -> f64 {
        match *self {
            InputKind::Numeric { .. } => value,
            InputKind::Slider { min, max, .. } => value.clamp(min, max),
        }
    }
}

/// A single survey question.
///
/// `name` is the unique identifier used to key raw answers; `label` is the
/// text shown to the user.
#[derive(Debug, Clone)]
pub struct Question {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: InputKind,
}

/// One of the four maturity dimensions, holding its questions in display
/// order.
#[derive(Debug, Clone)]
pub struct Category {
    pub name: &'static str,
    pub description: &'static str,
    pub questions: Vec<Question>,
}

/// The full survey: an ordered list of categories. Built once at startup and
/// read-only afterwards.
#[derive(Debug, Clone)]
pub struct SurveyDefinition {
    pub categories: Vec<Category>,
}

impl SurveyDefinition {
    /// The standard four-category digital maturity survey.
    pub fn standard() -> Self {
        Self {
            categories: vec![
                Category {
                    name: "Category 1",
                    description: "Digital Business Strategy",
                    questions: vec![
                        Question {
                            name: "Q1ai",
                            label: "Question 1: Already Invested (count)",
                            kind: InputKind::Numeric { default: 0.0 },
                        },
                        Question {
                            name: "Q1pi",
                            label: "Question 1: Plan to Invest (count)",
                            kind: InputKind::Numeric { default: 0.0 },
                        },
                        Question {
                            name: "Q2_cat1",
                            label: "Question 2: Preparedness Score (0-10)",
                            kind: InputKind::Numeric { default: 0.0 },
                        },
                    ],
                },
                Category {
                    name: "Category 2",
                    description: "Digital Readiness",
                    questions: vec![
                        Question {
                            name: "Q3",
                            label: "Question 3: Count of Digital Technologies Already Being Used",
                            kind: InputKind::Numeric { default: 0.0 },
                        },
                        Question {
                            name: "Simulation",
                            label: "Question 4: Simulation & Digital Twins",
                            kind: InputKind::Slider { min: 0.0, max: 5.0, default: 0.0 },
                        },
                        Question {
                            name: "VR_AR",
                            label: "Question 4: Virtual/Augmented Reality",
                            kind: InputKind::Slider { min: 0.0, max: 5.0, default: 0.0 },
                        },
                        Question {
                            name: "CAD_CAM",
                            label: "Question 4: Computer Aided Design & Manufacturing",
                            kind: InputKind::Slider { min: 0.0, max: 5.0, default: 0.0 },
                        },
                        Question {
                            name: "MES",
                            label: "Question 4: Manufacturing Execution Systems",
                            kind: InputKind::Slider { min: 0.0, max: 5.0, default: 0.0 },
                        },
                        Question {
                            name: "IoT",
                            label: "Question 4: Internet of Things (IoT) and Industrial Internet of Things (I-IoT)",
                            kind: InputKind::Slider { min: 0.0, max: 5.0, default: 0.0 },
                        },
                        Question {
                            name: "Blockchain",
                            label: "Question 4: Blockchain Technology",
                            kind: InputKind::Slider { min: 0.0, max: 5.0, default: 0.0 },
                        },
                        Question {
                            name: "Additive",
                            label: "Question 4: Additive Manufacturing",
                            kind: InputKind::Slider { min: 0.0, max: 5.0, default: 0.0 },
                        },
                    ],
                },
                Category {
                    name: "Category 3",
                    description: "Human-centric Digitilisation",
                    questions: vec![
                        Question {
                            name: "Q5_cat3",
                            label: "Question 5: Re-skilling and up-skilling of staff for digitalisation",
                            kind: InputKind::Numeric { default: 0.0 },
                        },
                        Question {
                            name: "Q6_cat3",
                            label: "Question 6: Adoption of new digital solutions",
                            kind: InputKind::Numeric { default: 0.0 },
                        },
                    ],
                },
                Category {
                    name: "Category 4",
                    description: "Data Management & Security",
                    questions: vec![
                        Question {
                            name: "Q5_cat4",
                            label: "Question 7: How is data managed?",
                            kind: InputKind::Numeric { default: 0.0 },
                        },
                        Question {
                            name: "Q6_cat4",
                            label: "Question 8: Is data secured?",
                            kind: InputKind::Numeric { default: 0.0 },
                        },
                    ],
                },
            ],
        }
    }

    /// All questions across categories, in display order.
    pub fn questions(&self) -> impl Iterator<Item = &Question> {
        self.categories.iter().flat_map(|c| c.questions.iter())
    }

    pub fn question_count(&self) -> usize {
        self.categories.iter().map(|c| c.questions.len()).sum()
    }

    pub fn find(&self, name: &str) -> Option<&Question> {
        self.questions().find(|q| q.name == name)
    }

    /// Names of slider questions, in display order.
    pub fn slider_names(&self) -> Vec<&'static str> {
        self.questions()
            .filter(|q| matches!(q.kind, InputKind::Slider { .. }))
            .map(|q| q.name)
            .collect()
    }
}
