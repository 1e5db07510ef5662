//! Append-only operation log.
//!
//! Every successful mutation appends one JSON line next to the journal
//! file. Logging failures are reported by the callers as warnings and never
//! abort the command.

use crate::errors::AppResult;
use crate::utils::formatting::strip_ansi;
use ansi_term::Colour;
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Serialize, Deserialize)]
pub struct OplogEntry {
    pub ts: String, // ISO 8601, local time
    pub operation: String,
    pub target: String,
    pub message: String,
}

/// The oplog lives next to the journal file, so a `--data` override moves
/// the log together with the data.
pub fn path_for(journal: &str) -> PathBuf {
    Path::new(journal).with_extension("oplog")
}

/// Append one record to the oplog.
pub fn append(journal: &str, operation: &str, target: &str, message: &str) -> AppResult<()> {
    let entry = OplogEntry {
        ts: Local::now().to_rfc3339(),
        operation: operation.to_string(),
        target: target.to_string(),
        message: message.to_string(),
    };

    let line = serde_json::to_string(&entry)?;

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path_for(journal))?;
    writeln!(file, "{}", line)?;

    Ok(())
}

/// Color per operation, for `log --print`.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" => Colour::Green,
        "clear" => Colour::Red,
        "backup" => Colour::Blue,
        "export" => Colour::Yellow,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print(journal: &str) -> AppResult<()> {
        let path = path_for(journal);

        if !path.exists() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        let content = std::fs::read_to_string(&path)?;

        let mut entries: Vec<OplogEntry> = Vec::new();
        for line in content.lines().filter(|l| !l.trim().is_empty()) {
            entries.push(serde_json::from_str(line)?);
        }

        if entries.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        // Column widths from the real (ANSI-free) content, op column capped.
        let op_w = entries
            .iter()
            .map(|e| op_target(e).len())
            .max()
            .unwrap_or(10)
            .min(60);
        let ts_w = entries.iter().map(|e| e.ts.len()).max().unwrap_or(0);

        println!("📜 Internal log:\n");

        for (idx, entry) in entries.iter().enumerate() {
            let color = color_for_operation(&entry.operation);

            let mut label = op_target(entry);
            if label.len() > op_w {
                label.truncate(op_w.saturating_sub(3));
                label.push_str("...");
            }

            // Only the operation word is colored; the target stays plain.
            let colored = match label.split_once(' ') {
                Some((op, rest)) => format!("{} {}", color.paint(op), rest),
                None => color.paint(label.as_str()).to_string(),
            };

            let padding = " ".repeat(op_w.saturating_sub(strip_ansi(&colored).len()));

            println!(
                "{:>3}: {:<ts_w$} | {}{} => {}",
                idx + 1,
                entry.ts,
                colored,
                padding,
                entry.message,
                ts_w = ts_w
            );
        }

        Ok(())
    }
}

fn op_target(entry: &OplogEntry) -> String {
    if entry.target.is_empty() {
        entry.operation.clone()
    } else {
        format!("{} ({})", entry.operation, entry.target)
    }
}
