use owo_colors::OwoColorize;
use std::io::IsTerminal;
use terminal_size::{terminal_size, Width};

use crate::scoring::{Band, ScoreReport};
use crate::survey::{InputKind, SurveyDefinition};

const GAUGE_WIDTH: usize = 20;
const TITLE_WIDTH: usize = 44;

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Format a score for display: one decimal place with a percent suffix.
/// Rounding happens here and only here; the engine keeps full precision.
pub fn format_percent(score: f64) -> String {
    format!("{:.1} %", score)
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

fn paint(text: &str, band: Band) -> String {
    match band {
        Band::Nascent => text.red().to_string(),
        Band::Developing => text.truecolor(255, 165, 0).to_string(),
        Band::Maturing => text.yellow().to_string(),
        Band::Leading => text.green().to_string(),
    }
}

/// A text gauge: filled blocks proportional to score on a 0-100 scale,
/// colored by band. Out-of-range scores clamp to an empty or full bar.
pub fn gauge(score: f64, width: usize, use_colors: bool) -> String {
    let ratio = (score / 100.0).clamp(0.0, 1.0);
    let filled = (ratio * width as f64).round() as usize;
    let empty = width.saturating_sub(filled);

    let bar = "█".repeat(filled);
    let rest = "░".repeat(empty);

    if use_colors {
        format!("{}{}", paint(&bar, Band::for_score(score)), rest.dimmed())
    } else {
        format!("{}{}", bar, rest)
    }
}

fn score_line(title: &str, score: f64, use_colors: bool, show_gauge: bool) -> String {
    // Pad before coloring so ANSI escapes don't break the alignment.
    let percent = format!("{:>8}", format_percent(score));
    let percent = if use_colors {
        paint(&percent, Band::for_score(score))
    } else {
        percent
    };

    let mut line = format!("{:<width$}{}", title, percent, width = TITLE_WIDTH);
    if show_gauge {
        line.push_str("  ");
        line.push_str(&gauge(score, GAUGE_WIDTH, use_colors));
    }
    line
}

/// Format a score report as labeled metrics with text gauges, one line per
/// category plus the overall score. Gauges are dropped on narrow terminals.
pub fn format_report(report: &ScoreReport, use_colors: bool) -> String {
    let show_gauges = get_terminal_width().map_or(true, |w| w >= TITLE_WIDTH + 10 + GAUGE_WIDTH);

    let header = if use_colors {
        "Digital Maturity Scores".bold().to_string()
    } else {
        "Digital Maturity Scores".to_string()
    };

    let mut lines = vec![header, String::new()];
    for (title, score) in report.categories() {
        lines.push(score_line(title, score, use_colors, show_gauges));
    }
    lines.push(String::new());
    lines.push(score_line(
        "Overall Digital Maturity",
        report.overall,
        use_colors,
        show_gauges,
    ));
    lines.join("\n")
}

/// Format a report as tab-separated values for scripting
/// Columns: category title, score to one decimal (no headers, no colors)
pub fn format_tsv(report: &ScoreReport) -> String {
    report
        .categories()
        .iter()
        .map(|(title, score)| format!("{}\t{:.1}", title, score))
        .chain(std::iter::once(format!(
            "Overall Digital Maturity\t{:.1}",
            report.overall
        )))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Print the survey definition: categories, question names, labels, input
/// kinds, bounds, and defaults.
pub fn format_questions(survey: &SurveyDefinition, use_colors: bool) -> String {
    let mut lines = Vec::new();

    for (i, category) in survey.categories.iter().enumerate() {
        if i > 0 {
            lines.push(String::new());
        }
        let heading = format!("{} - {}", category.name, category.description);
        lines.push(if use_colors {
            heading.bold().to_string()
        } else {
            heading
        });

        for question in &category.questions {
            let kind = match question.kind {
                InputKind::Numeric { default } => format!("number, default {}", default),
                InputKind::Slider { min, max, default } => {
                    format!("slider {}-{}, default {}", min, max, default)
                }
            };
            let name = if use_colors {
                question.name.cyan().to_string()
            } else {
                question.name.to_string()
            };
            lines.push(format!("  {:<12}{}  ({})", name, question.label, kind));
        }
    }

    lines.join("\n")
}
