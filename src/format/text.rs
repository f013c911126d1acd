//! Text formatting functions for `issue_desk`.
//!
//! Provides terminal formatting for the projector's cards:
//! - Status icons (○ ✓)
//! - Priority badges ([low], [medium], [high])
//! - Width-aware title truncation
//! - Optional ANSI colour

use chrono::{DateTime, Utc};
use crossterm::style::Stylize;
use desk_lib::{IssueCard, Priority, Rendering, Status, StatusCounts};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Maximum display width of a title on the summary line.
pub const TITLE_WIDTH: usize = 60;

/// Status icon characters.
pub mod icons {
    /// Open issue - awaiting triage (hollow circle).
    pub const OPEN: &str = "○";
    /// Resolved - done (checkmark).
    pub const RESOLVED: &str = "✓";
}

/// Return the icon character for a status.
#[must_use]
pub const fn format_status_icon(status: Status) -> &'static str {
    match status {
        Status::Open => icons::OPEN,
        Status::Resolved => icons::RESOLVED,
    }
}

/// Format priority as a bracketed badge.
#[must_use]
pub fn format_priority_badge(priority: Priority, color: bool) -> String {
    let badge = format!("[{}]", priority.as_str());
    if !color {
        return badge;
    }
    match priority {
        Priority::High => badge.red().bold().to_string(),
        Priority::Medium => badge.yellow().to_string(),
        Priority::Low => badge.green().to_string(),
    }
}

/// Format a creation timestamp for display.
#[must_use]
pub fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d %H:%M").to_string()
}

/// Cut `text` to at most `width` display columns, marking the cut with `…`.
#[must_use]
pub fn truncate_to_width(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    let budget = width.saturating_sub(1);
    let mut used = 0;
    let mut out = String::new();
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push('…');
    out
}

/// Format the summary line of a card.
///
/// Format: `{icon} {id} [{priority}] {title}`
#[must_use]
pub fn format_card_line(card: &IssueCard, color: bool) -> String {
    let title = truncate_to_width(&card.title, TITLE_WIDTH);
    let line = format!(
        "{} {} {} {}",
        format_status_icon(card.status),
        card.id,
        format_priority_badge(card.priority, color),
        title,
    );
    if color && card.status == Status::Resolved {
        line.dim().to_string()
    } else {
        line
    }
}

/// Format a full card: summary line, description, badges and action.
#[must_use]
pub fn format_card(card: &IssueCard, color: bool) -> String {
    let mut out = format_card_line(card, color);
    out.push('\n');
    for line in card.description.lines() {
        out.push_str("    ");
        out.push_str(line);
        out.push('\n');
    }
    out.push_str(&format!(
        "    Status: {} | Priority: {} | Reported: {} | Action: {}\n",
        card.status_badge,
        card.priority_badge,
        format_timestamp(card.created_at),
        card.toggle_label,
    ));
    out
}

/// Format a whole rendering; an empty one becomes its indicator message.
#[must_use]
pub fn format_rendering(rendering: &Rendering, color: bool) -> String {
    match rendering {
        Rendering::Empty { message, .. } => format!("{message}\n"),
        Rendering::Cards { cards, .. } => {
            let mut out = String::new();
            for (i, card) in cards.iter().enumerate() {
                if i > 0 {
                    out.push('\n');
                }
                out.push_str(&format_card(card, color));
            }
            out.push_str(&format!("\n{} issue(s)\n", cards.len()));
            out
        }
    }
}

/// Format per-status totals.
#[must_use]
pub fn format_counts(counts: &StatusCounts) -> String {
    format!(
        "{} open, {} resolved, {} total",
        counts.open,
        counts.resolved,
        counts.total()
    )
}
