use desk_lib::{Filter, Issue, Rendering, StatusCounts};
use serde::Serialize;

/// `list --json` payload.
#[derive(Debug, Clone, Serialize)]
pub struct ListOutput<'a> {
    pub filter: Filter,
    pub counts: StatusCounts,
    pub rendering: &'a Rendering,
}

/// Result of a mutating command.
#[derive(Debug, Clone, Serialize)]
pub struct MutationOutput<'a> {
    pub action: &'static str,
    pub issue: &'a Issue,
}

/// `delete --json` payload.
#[derive(Debug, Clone, Serialize)]
pub struct DeleteOutput<'a> {
    pub id: &'a str,
    pub deleted: bool,
}

/// `stats --json` payload.
#[derive(Debug, Clone, Serialize)]
pub struct StatsOutput {
    #[serde(flatten)]
    pub counts: StatusCounts,
    pub total: usize,
}

impl From<StatusCounts> for StatsOutput {
    fn from(counts: StatusCounts) -> Self {
        Self {
            total: counts.total(),
            counts,
        }
    }
}
