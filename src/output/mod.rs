pub mod formatter;

pub use formatter::{
    format_percent, format_questions, format_report, format_tsv, gauge, should_use_colors,
};
