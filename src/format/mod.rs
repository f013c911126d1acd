//! Output formatting for `issue_desk`.
//!
//! Supports human-readable text cards and machine-parseable JSON.
//! Diagnostics always go to stderr.

mod output;
mod text;

pub use output::{DeleteOutput, ListOutput, MutationOutput, StatsOutput};
pub use text::{
    TITLE_WIDTH, format_card, format_card_line, format_counts, format_priority_badge,
    format_rendering, format_status_icon, format_timestamp, icons, truncate_to_width,
};

use crossterm::tty::IsTty;

/// Whether text output should carry ANSI colour.
///
/// Off for JSON, when `NO_COLOR` is set, or when stdout is not a terminal.
#[must_use]
pub fn use_color(json: bool) -> bool {
    !json && std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_tty()
}
