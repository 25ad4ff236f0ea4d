use std::fmt;

use serde::{Deserialize, Serialize};

/// The 8 workflow-architecture patterns a requirement can be classified into.
///
/// `Hybrid` carries no indicators of its own. It is never scored and never a
/// primary recommendation; it names the scaffold used when two scored
/// patterns are co-dominant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PatternType {
    #[serde(rename = "RAG")]
    Rag,
    #[serde(rename = "AGENT")]
    Agent,
    #[serde(rename = "TOOL")]
    Tool,
    #[serde(rename = "WORKFLOW")]
    Workflow,
    #[serde(rename = "MAPREDUCE")]
    MapReduce,
    #[serde(rename = "MULTI_AGENT")]
    MultiAgent,
    #[serde(rename = "STRUCTURED_OUTPUT")]
    StructuredOutput,
    #[serde(rename = "HYBRID")]
    Hybrid,
}

impl PatternType {
    /// Total number of pattern types.
    pub const COUNT: usize = 8;

    /// All variants, in declaration order.
    pub const ALL: [PatternType; 8] = [
        Self::Rag,
        Self::Agent,
        Self::Tool,
        Self::Workflow,
        Self::MapReduce,
        Self::MultiAgent,
        Self::StructuredOutput,
        Self::Hybrid,
    ];

    /// Patterns that carry indicators and receive a score, in tie-break
    /// priority order (earlier wins a tie).
    pub const SCORED: [PatternType; 7] = [
        Self::Workflow,
        Self::Tool,
        Self::Rag,
        Self::Agent,
        Self::MapReduce,
        Self::MultiAgent,
        Self::StructuredOutput,
    ];

    /// Wire name, as serialized.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Rag => "RAG",
            Self::Agent => "AGENT",
            Self::Tool => "TOOL",
            Self::Workflow => "WORKFLOW",
            Self::MapReduce => "MAPREDUCE",
            Self::MultiAgent => "MULTI_AGENT",
            Self::StructuredOutput => "STRUCTURED_OUTPUT",
            Self::Hybrid => "HYBRID",
        }
    }

    /// Position in the tie-break priority order. Lower wins.
    /// `Hybrid` sorts after every scored pattern.
    pub fn priority(&self) -> usize {
        match self {
            Self::Workflow => 0,
            Self::Tool => 1,
            Self::Rag => 2,
            Self::Agent => 3,
            Self::MapReduce => 4,
            Self::MultiAgent => 5,
            Self::StructuredOutput => 6,
            Self::Hybrid => 7,
        }
    }

    /// Position in declaration order, the last-resort tie-breaker.
    pub fn declaration_index(&self) -> usize {
        match self {
            Self::Rag => 0,
            Self::Agent => 1,
            Self::Tool => 2,
            Self::Workflow => 3,
            Self::MapReduce => 4,
            Self::MultiAgent => 5,
            Self::StructuredOutput => 6,
            Self::Hybrid => 7,
        }
    }

    /// Whether this pattern receives a score.
    pub fn is_scored(&self) -> bool {
        !matches!(self, Self::Hybrid)
    }

    /// Parse a pattern name leniently: case-insensitive, `-` and ` ` accepted
    /// in place of `_`, and `MAP_REDUCE` accepted for `MAPREDUCE`.
    pub fn parse_str(s: &str) -> Option<Self> {
        let normalized: String = s
            .trim()
            .chars()
            .map(|c| match c {
                '-' | ' ' => '_',
                c => c.to_ascii_uppercase(),
            })
            .collect();
        match normalized.as_str() {
            "RAG" => Some(Self::Rag),
            "AGENT" => Some(Self::Agent),
            "TOOL" => Some(Self::Tool),
            "WORKFLOW" => Some(Self::Workflow),
            "MAPREDUCE" | "MAP_REDUCE" => Some(Self::MapReduce),
            "MULTI_AGENT" | "MULTIAGENT" => Some(Self::MultiAgent),
            "STRUCTURED_OUTPUT" => Some(Self::StructuredOutput),
            "HYBRID" => Some(Self::Hybrid),
            _ => None,
        }
    }
}

impl fmt::Display for PatternType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
