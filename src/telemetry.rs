use prometheus::register_counter_vec;
use prometheus::CounterVec;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use lazy_static::lazy_static;

/// Filter used when `LOG_LEVEL` is unset. `tower_http` logs each request at debug.
const DEFAULT_LOG_FILTER: &str = "info,tower_http=debug,sqlx=warn";

lazy_static! {
    static ref QUIZ_QUESTIONS_SERVED: CounterVec = register_counter_vec!(
        "quiz_questions_served_total",
        "Number of questions handed out by the quiz endpoint",
        &["category"]
    )
    .expect("quiz counter is registered once");
    static ref QUESTION_MUTATIONS: CounterVec = register_counter_vec!(
        "questions_mutations_total",
        "Number of created and deleted questions",
        &["operation"]
    )
    .expect("mutation counter is registered once");
}

#[derive(Debug, Clone, Copy)]
pub enum Mutation {
    Create,
    Delete,
}

impl Mutation {
    fn label(self) -> &'static str {
        match self {
            Mutation::Create => "create",
            Mutation::Delete => "delete",
        }
    }
}

// `None` is a quiz over every category
fn category_label(category: Option<i64>) -> String {
    category.map_or_else(|| "all".to_owned(), |id| id.to_string())
}

pub fn record_quiz_question(category: Option<i64>) {
    QUIZ_QUESTIONS_SERVED
        .with_label_values(&[category_label(category).as_str()])
        .inc();
}

pub fn record_mutation(mutation: Mutation) {
    QUESTION_MUTATIONS
        .with_label_values(&[mutation.label()])
        .inc();
}

fn log_filter() -> EnvFilter {
    EnvFilter::try_from_env("LOG_LEVEL").unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Sets the global subscriber. `INCLUDE_SPAN_EVENTS=true` also logs span enter and exit.
pub fn init_tracing() {
    let span_events = if std::env::var("INCLUDE_SPAN_EVENTS")
        .is_ok_and(|value| value.eq_ignore_ascii_case("true"))
    {
        FmtSpan::ENTER | FmtSpan::EXIT
    } else {
        FmtSpan::NONE
    };

    tracing_subscriber::registry()
        .with(log_filter())
        .with(fmt::layer().with_span_events(span_events))
        .init();
}
