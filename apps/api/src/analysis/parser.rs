//! Response Parser — extracts a structured lead judgment from raw model output.
//!
//! Two-tier strategy: a strict JSON decode of the whole input, then a
//! heuristic line/keyword scan used only when the input is not valid JSON.
//! Parsing is pure and never fails — unusable input degrades to a
//! [`LeadAnalysis`] with every field absent.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Structured judgment extracted from one model response. Every field is
/// optional: `None` means the raw text gave no usable value for it.
///
/// The strict JSON path passes the model's strings through untouched (the
/// prompt asks for `Pursue|Negotiate|Decline` and `Low|Medium|High`); the
/// heuristic path emits `Good`/`Bad` verdicts and `Low`/`Medium`/`High`
/// risk levels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadAnalysis {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verdict: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub red_flags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply: Option<String>,
    /// 0-100 score the prompt requests. Strict path only — the heuristic
    /// scan never guesses a number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<u32>,
}

impl LeadAnalysis {
    /// True when no field at all could be extracted.
    pub fn is_empty(&self) -> bool {
        self.verdict.is_none()
            && self.risk.is_none()
            && self.red_flags.is_none()
            && self.reply.is_none()
            && self.score.is_none()
    }
}

/// Parses raw model output into a [`LeadAnalysis`].
///
/// If the whole input decodes as JSON, fields are pulled from the decoded
/// value and the heuristic scan is never consulted — a valid object with
/// missing keys yields absent fields, not guesses. Only a JSON syntax
/// failure falls through to the heuristic scan.
pub fn parse_analysis(raw: &str) -> LeadAnalysis {
    match serde_json::from_str::<Value>(raw) {
        Ok(value) => parse_strict(&value),
        Err(_) => parse_heuristic(raw),
    }
}

fn parse_strict(value: &Value) -> LeadAnalysis {
    LeadAnalysis {
        verdict: value
            .get("decision")
            .and_then(Value::as_str)
            .map(str::to_owned),
        risk: value
            .get("riskLevel")
            .and_then(Value::as_str)
            .map(str::to_owned),
        red_flags: value.get("redFlags").and_then(Value::as_array).map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_owned)
                .collect()
        }),
        reply: value
            .get("suggestedReply")
            .and_then(Value::as_str)
            .map(str::to_owned),
        score: value.get("score").and_then(Value::as_u64).map(|s| s as u32),
    }
}

fn parse_heuristic(raw: &str) -> LeadAnalysis {
    let folded = raw.to_lowercase();
    let lines: Vec<&str> = raw
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    LeadAnalysis {
        verdict: scan_verdict(&folded),
        risk: scan_risk(&folded),
        red_flags: scan_red_flags(&lines),
        reply: scan_reply(&lines),
        score: None,
    }
}

fn scan_verdict(folded: &str) -> Option<String> {
    if !folded.contains("verdict") {
        return None;
    }
    if folded.contains("good") {
        Some("Good".to_owned())
    } else if folded.contains("bad") {
        Some("Bad".to_owned())
    } else {
        None
    }
}

/// "high" wins over "medium" over "low" when several appear.
fn scan_risk(folded: &str) -> Option<String> {
    if !folded.contains("risk") {
        return None;
    }
    [("high", "High"), ("medium", "Medium"), ("low", "Low")]
        .iter()
        .find(|(needle, _)| folded.contains(needle))
        .map(|(_, level)| (*level).to_owned())
}

/// Line scanner state for the red-flags section.
#[derive(Debug, PartialEq)]
enum ScanState {
    Scanning,
    InRedFlags,
}

const BULLET_MARKERS: [char; 3] = ['-', '•', '*'];

/// Collects the lines between a "red flag" heading and a reply heading,
/// in order. `None` when nothing was collected, never an empty vec.
fn scan_red_flags(lines: &[&str]) -> Option<Vec<String>> {
    let mut state = ScanState::Scanning;
    let mut flags: Vec<String> = Vec::new();

    for line in lines {
        let folded = line.to_lowercase();

        // The heading line itself is never content.
        if folded.contains("red flag") {
            state = ScanState::InRedFlags;
            continue;
        }

        if state == ScanState::InRedFlags {
            if folded.starts_with("suggested reply") || folded.starts_with("reply") {
                state = ScanState::Scanning;
                continue;
            }
            let cleaned = strip_bullet(line);
            if cleaned.chars().count() > 2 {
                flags.push(cleaned.to_owned());
            }
        }
    }

    if flags.is_empty() {
        None
    } else {
        Some(flags)
    }
}

/// Removes at most one leading bullet marker plus the whitespace after it.
fn strip_bullet(line: &str) -> &str {
    let mut chars = line.chars();
    match chars.next() {
        Some(c) if BULLET_MARKERS.contains(&c) => chars.as_str().trim_start(),
        _ => line,
    }
}

/// Everything after the first "suggested reply" line, joined back together.
fn scan_reply(lines: &[&str]) -> Option<String> {
    let heading = lines
        .iter()
        .position(|line| line.to_lowercase().contains("suggested reply"))?;
    let reply = lines[heading + 1..].join("\n");
    let reply = reply.trim();
    if reply.is_empty() {
        None
    } else {
        Some(reply.to_owned())
    }
}
