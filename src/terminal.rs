//! Line-oriented terminal front end: command parsing and a plain-text view.
//!
//! This is a presentation collaborator only. It reads [`ViewState`] and maps
//! input lines to session calls; it holds no state of its own.

use std::fmt::Write as _;

use crate::state::{AnalysisStatus, ViewState};

#[cfg(test)]
#[path = "terminal_test.rs"]
mod terminal_test;

/// One line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// New search box contents.
    Query(String),
    /// Pick the Nth (1-based) suggestion.
    Pick(usize),
    /// Analyze the given name, or the current query when `None`.
    Analyze(Option<String>),
    Quit,
}

impl Command {
    /// Parse a raw input line. Unknown `:` commands are `Err` with a hint.
    ///
    /// # Errors
    ///
    /// Returns a usage message for malformed `:` commands.
    pub fn parse(line: &str) -> Result<Self, String> {
        let line = line.trim_end_matches(['\r', '\n']);
        let Some(rest) = line.strip_prefix(':') else {
            return Ok(Self::Query(line.to_owned()));
        };

        let (verb, arg) = match rest.split_once(char::is_whitespace) {
            Some((verb, arg)) => (verb, arg.trim()),
            None => (rest, ""),
        };
        match verb {
            "q" | "quit" => Ok(Self::Quit),
            "a" | "analyze" if arg.is_empty() => Ok(Self::Analyze(None)),
            "a" | "analyze" => Ok(Self::Analyze(Some(arg.to_owned()))),
            "p" | "pick" => arg
                .parse::<usize>()
                .ok()
                .filter(|n| *n > 0)
                .map(Self::Pick)
                .ok_or_else(|| format!("usage: :pick <1-based index>, got {arg:?}")),
            other => Err(format!("unknown command :{other} (try :pick N, :analyze [name], :quit)")),
        }
    }
}

/// Plain-text rendering of the whole view.
#[must_use]
pub fn render(state: &ViewState) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "search: {}", state.query);
    for (i, s) in state.suggestions.iter().enumerate() {
        let _ = writeln!(out, "  {}. {} ({})", i + 1, s.title, s.app_id);
    }

    let analysis = &state.analysis;
    match analysis.status {
        AnalysisStatus::Idle => {}
        AnalysisStatus::Loading => out.push_str("Analyzing...\n"),
        AnalysisStatus::Success => {}
        AnalysisStatus::Error => {
            let message = analysis.error_message.as_deref().unwrap_or_default();
            let _ = writeln!(out, "error: {message}");
        }
    }

    if let Some(result) = &analysis.result {
        let info = &result.app_info;
        let summary = &result.sentiment_data;
        match info.rating {
            Some(rating) => {
                let _ = writeln!(out, "{} by {} (rating {rating})", info.name, info.developer);
            }
            None => {
                let _ = writeln!(out, "{} by {} (unrated)", info.name, info.developer);
            }
        }
        let _ = writeln!(out, "  avg score: {}  reviews: {}", summary.average_score, summary.review_count);
        let _ = writeln!(
            out,
            "  positive {}%  negative {}%  neutral {}%",
            summary.positive_percentage, summary.negative_percentage, summary.neutral_percentage
        );
        for review in result.displayed_samples() {
            let _ = writeln!(
                out,
                "  - {}: \"{}\" [{:?} {}]",
                review.user_name.as_deref().unwrap_or("anonymous"),
                review.content.as_deref().unwrap_or_default(),
                review.sentiment,
                review.sentiment_score
            );
        }
    }
    out
}
