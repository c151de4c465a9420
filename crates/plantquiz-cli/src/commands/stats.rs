//! The `plantquiz stats` command.

use std::path::PathBuf;

use anyhow::Result;
use serde::Serialize;

use plantquiz_core::config::load_config_from;
use plantquiz_core::model::SessionRecord;
use plantquiz_core::progress::ProgressStore;

/// JSON shape of `plantquiz stats --format json`.
#[derive(Debug, Serialize)]
struct StatsOutput {
    high_score: u32,
    session_count: usize,
    average_grade: Option<f64>,
    mistake_count: usize,
    sessions: Vec<SessionRecord>,
}

pub fn execute(
    data_dir: Option<PathBuf>,
    format: String,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let store = ProgressStore::open(data_dir.unwrap_or(config.data_dir))?;

    let history = store.history();
    let average_grade = if history.sessions.is_empty() {
        None
    } else {
        let sum: f64 = history.sessions.iter().map(|s| s.grade).sum();
        Some(sum / history.sessions.len() as f64)
    };

    let stats = StatsOutput {
        high_score: history.high_score,
        session_count: history.sessions.len(),
        average_grade,
        mistake_count: store.mistakes().len(),
        sessions: history.sessions,
    };

    match format.as_str() {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&stats)?);
        }
        _ => print_text(&stats),
    }

    Ok(())
}

fn print_text(stats: &StatsOutput) {
    use comfy_table::{Cell, Table};

    if stats.sessions.is_empty() {
        println!("No sessions recorded yet.");
        println!("Mistakes to practice: {}", stats.mistake_count);
        return;
    }

    println!("High score: {}", stats.high_score);
    println!("{} session(s) completed", stats.session_count);
    if let Some(avg) = stats.average_grade {
        println!("Average grade: {avg:.1}");
    }
    println!("Mistakes to practice: {}", stats.mistake_count);

    let mut table = Table::new();
    table.set_header(vec!["Date", "Score", "Max", "Grade"]);
    for session in &stats.sessions {
        table.add_row(vec![
            Cell::new(session.date),
            Cell::new(session.score),
            Cell::new(session.max_score),
            Cell::new(format!("{:.1}", session.grade)),
        ]);
    }

    println!("\n{table}");
}
