mod answers;
mod schema;

pub use answers::{
    load_raw_answers, parse_raw_answers, AnswerError, AnswerSet, RawAnswers,
};
pub use schema::{Category, InputKind, Question, SurveyDefinition};
