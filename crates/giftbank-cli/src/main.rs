//! giftbank CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::{Parser, Subcommand};

use giftbank_core::config::load_config_from;

mod commands;

#[derive(Parser)]
#[command(name = "giftbank", version, about = "GIFT question banks and exams")]
struct Cli {
    /// Config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the questions of a bank
    Questions {
        #[command(subcommand)]
        command: QuestionsCommand,
    },

    /// Build, check, take and score exams
    Exam {
        #[command(subcommand)]
        command: ExamCommand,
    },

    /// Question-type profiles
    Profile {
        #[command(subcommand)]
        command: ProfileCommand,
    },

    /// Exam author contact cards
    Teacher {
        #[command(subcommand)]
        command: TeacherCommand,
    },

    /// Create starter config and sample question bank
    Init,
}

#[derive(Subcommand)]
enum QuestionsCommand {
    /// List every question in a bank
    List {
        /// Question bank file
        file: PathBuf,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show one question in detail
    Show {
        /// Question bank file
        file: PathBuf,

        /// Question id (a bare number also matches `Q<number>`)
        #[arg(long)]
        id: String,
    },

    /// Find questions whose statement or answers contain a keyword
    Search {
        /// Question bank file
        file: PathBuf,

        #[arg(long)]
        keyword: String,
    },
}

#[derive(Subcommand)]
enum ExamCommand {
    /// Select questions by id and write an exam file
    Build {
        /// Question bank file
        file: PathBuf,

        /// Question ids (comma-separated)
        #[arg(long)]
        ids: String,

        /// Output file (default: <output_dir>/exam.gift)
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Report parse errors and exam rule violations
    Check {
        /// Exam file
        file: PathBuf,
    },

    /// Take an exam interactively on stdin
    Simulate {
        /// Exam file
        file: PathBuf,

        /// Save the responses as JSON
        #[arg(long)]
        save: Option<PathBuf>,
    },

    /// Score saved responses against an exam
    Score {
        /// Exam file
        exam: PathBuf,

        /// Responses JSON file
        answers: PathBuf,

        /// Output format: text, json, html
        #[arg(long, default_value = "text")]
        format: String,

        /// Output file (html default: <output_dir>/report-<timestamp>.html)
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
enum ProfileCommand {
    /// Count questions per type
    Show {
        /// Question bank file
        file: PathBuf,
    },

    /// Draw a per-type histogram
    Histogram {
        /// Question bank file
        file: PathBuf,
    },

    /// Compare the type profiles of two files
    Compare {
        first: PathBuf,
        second: PathBuf,
    },
}

#[derive(Subcommand)]
enum TeacherCommand {
    /// Write a vCard for the exam author
    Vcard {
        #[arg(long)]
        last_name: String,

        #[arg(long)]
        first_name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        institution: String,

        /// Subject taught
        #[arg(long)]
        subject: String,

        /// Output file (default: <output_dir>/teacher.vcf)
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("giftbank=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Questions { command } => match command {
            QuestionsCommand::List { file, json } => commands::questions::list(file, json),
            QuestionsCommand::Show { file, id } => commands::questions::show(file, id),
            QuestionsCommand::Search { file, keyword } => {
                commands::questions::search(file, keyword)
            }
        },
        Commands::Exam { command } => {
            let config = load_config_from(config_path)?;
            match command {
                ExamCommand::Build { file, ids, output } => {
                    commands::exam::build(file, ids, output, &config)
                }
                ExamCommand::Check { file } => commands::exam::check(file, &config),
                ExamCommand::Simulate { file, save } => {
                    commands::exam::simulate(file, save).await
                }
                ExamCommand::Score {
                    exam,
                    answers,
                    format,
                    output,
                } => commands::exam::score(exam, answers, format, output, &config),
            }
        }
        Commands::Profile { command } => {
            let config = load_config_from(config_path)?;
            match command {
                ProfileCommand::Show { file } => commands::profile::show(file),
                ProfileCommand::Histogram { file } => commands::profile::histogram(file, &config),
                ProfileCommand::Compare { first, second } => {
                    commands::profile::compare(first, second)
                }
            }
        }
        Commands::Teacher { command } => match command {
            TeacherCommand::Vcard {
                last_name,
                first_name,
                email,
                institution,
                subject,
                output,
            } => {
                let config = load_config_from(config_path)?;
                let card = giftbank_report::TeacherCard::new(
                    &last_name,
                    &first_name,
                    &email,
                    &institution,
                    &subject,
                );
                commands::teacher::vcard(card, output, &config)
            }
        },
        Commands::Init => commands::init::execute(),
    }
}
