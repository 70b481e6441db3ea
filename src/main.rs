use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use serde::Serialize;
use study_quiz::{
    Flashcard, QuizQuestion, StudyKind, StudySession, StudyView, parse_quiz_from_file,
    parse_session_from_file,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Markdown quiz, or a session store response with --session
    input: PathBuf,

    /// Treat INPUT as a JSON session store response
    #[arg(long)]
    session: bool,

    /// Which view of the session to print (quiz, flashcards, summarize)
    #[arg(long, default_value = "quiz")]
    kind: StudyKind,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

#[derive(Debug, Serialize)]
struct ResolvedQuestion {
    question: String,
    options: Vec<String>,
    answer: String,
    correct_index: Option<usize>,
}

impl From<&QuizQuestion> for ResolvedQuestion {
    fn from(q: &QuizQuestion) -> Self {
        ResolvedQuestion {
            question: q.question.clone(),
            options: q.options.clone(),
            answer: q.answer.clone(),
            correct_index: q.correct_option_index(),
        }
    }
}

#[derive(Debug, Serialize, Default)]
struct Report {
    title: Option<String>,
    questions: Vec<ResolvedQuestion>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    flashcards: Vec<Flashcard>,
    #[serde(skip_serializing_if = "Option::is_none")]
    summary: Option<String>,
}

fn quiz_report(questions: &[QuizQuestion]) -> Report {
    Report {
        questions: questions.iter().map(ResolvedQuestion::from).collect(),
        ..Default::default()
    }
}

fn session_report(session: &StudySession, kind: StudyKind) -> Report {
    let title = Some(session.display_title(kind));
    match session.view(kind) {
        StudyView::Quiz(run) => Report {
            title,
            ..quiz_report(run.questions())
        },
        StudyView::Flashcards(_) => Report {
            title,
            flashcards: session.flashcards.clone(),
            ..Default::default()
        },
        StudyView::Summary(summary) => Report {
            title,
            summary: Some(summary),
            ..Default::default()
        },
        StudyView::Empty => {
            tracing::warn!(%kind, "session has nothing to show");
            Report {
                title,
                ..Default::default()
            }
        }
    }
}

fn run(args: &Args) -> anyhow::Result<String> {
    let report = if args.session {
        let session = parse_session_from_file(&args.input)
            .with_context(|| format!("failed to read session {}", args.input.display()))?
            .with_context(|| format!("no session found in {}", args.input.display()))?;
        session_report(&session, args.kind)
    } else {
        let questions = parse_quiz_from_file(&args.input)
            .with_context(|| format!("failed to read quiz {}", args.input.display()))?;
        quiz_report(&questions)
    };

    let json = if args.pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    Ok(json)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let args = Args::parse();
    let json = run(&args)?;
    let mut out = io::stdout().lock();
    writeln!(out, "{json}")?;
    Ok(())
}
