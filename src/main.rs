use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use maturometer::output;
use maturometer::scoring::{validate_survey, ScoreReport};
use maturometer::survey::{load_raw_answers, AnswerSet, SurveyDefinition};
use maturometer::tui;

// Exit codes
const EXIT_SUCCESS: i32 = 0;
const EXIT_INPUT: i32 = 1;
const EXIT_SCHEMA: i32 = 2;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Launch the interactive survey form (default if no subcommand)
    Tui,
    /// Score a set of answers without the interactive form
    Report {
        /// Use the schema's default values instead of an answers file
        #[arg(long)]
        demo: bool,

        /// YAML file mapping question names to numeric answers
        #[arg(long, conflicts_with = "demo")]
        answers: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
        format: ReportFormat,
    },
    /// Print the survey questions, bounds, and defaults
    Questions,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum ReportFormat {
    Text,
    Json,
    Tsv,
}

#[derive(Parser, Debug)]
#[command(name = "maturometer")]
#[command(about = "Digital maturity survey calculator", long_about = None)]
#[command(version)]
struct Cli {
    /// TUI color theme
    #[arg(long, value_enum, global = true, default_value_t = tui::Theme::Auto)]
    theme: tui::Theme,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Tui);

    // Validate the survey definition at startup
    let survey = SurveyDefinition::standard();
    if let Err(errors) = validate_survey(&survey) {
        eprintln!("Survey definition errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_SCHEMA);
    }

    match command {
        Commands::Tui => {
            let theme = tui::resolve_theme(cli.theme);
            let app = tui::App::new(survey, theme);
            if let Err(e) = tui::run_tui(app).await {
                eprintln!("Terminal error: {}", e);
                std::process::exit(EXIT_INPUT);
            }
        }
        Commands::Report { demo, answers, format } => {
            let answer_set = if demo {
                match AnswerSet::defaults(&survey) {
                    Ok(a) => a,
                    Err(e) => {
                        eprintln!("Demo answers error: {}", e);
                        std::process::exit(EXIT_SCHEMA);
                    }
                }
            } else if let Some(path) = answers {
                let raw = match load_raw_answers(&path) {
                    Ok(raw) => raw,
                    Err(e) => {
                        eprintln!("Answers error: {:#}", e);
                        std::process::exit(EXIT_INPUT);
                    }
                };
                match AnswerSet::from_raw(&raw) {
                    Ok(a) => a,
                    Err(e) => {
                        eprintln!("Answers error: {}", e);
                        std::process::exit(EXIT_INPUT);
                    }
                }
            } else {
                eprintln!("Pass --demo or --answers <file>. Example answers file:");
                eprintln!("  Q1ai: 2");
                eprintln!("  Q1pi: 3");
                eprintln!("  Q2_cat1: 5");
                eprintln!("  # ... one entry per question; see `maturometer questions`");
                std::process::exit(EXIT_INPUT);
            };

            let report = ScoreReport::from_answers(&answer_set);

            match format {
                ReportFormat::Text => {
                    let use_colors = output::should_use_colors();
                    println!("{}", output::format_report(&report, use_colors));
                }
                ReportFormat::Json => match serde_json::to_string_pretty(&report) {
                    Ok(json) => println!("{}", json),
                    Err(e) => {
                        eprintln!("Failed to serialize report: {}", e);
                        std::process::exit(EXIT_INPUT);
                    }
                },
                ReportFormat::Tsv => println!("{}", output::format_tsv(&report)),
            }
        }
        Commands::Questions => {
            let use_colors = output::should_use_colors();
            println!("{}", output::format_questions(&survey, use_colors));
        }
    }

    std::process::exit(EXIT_SUCCESS);
}
