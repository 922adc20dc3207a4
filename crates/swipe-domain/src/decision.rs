//! Like / pass decisions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The kind of decision an actor records about a target.
///
/// Each kind is its own edge-set: an actor may hold at most one `Like` and
/// at most one `Pass` towards the same target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionKind {
    Like,
    Pass,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown decision kind: {0}")]
pub struct UnknownDecisionKind(pub String);

impl DecisionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Like => "like",
            Self::Pass => "pass",
        }
    }

    /// User-facing confirmation returned once the decision is recorded.
    pub fn success_message(self) -> String {
        format!("success {} user", self.as_str())
    }
}

impl fmt::Display for DecisionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DecisionKind {
    type Err = UnknownDecisionKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "like" => Ok(Self::Like),
            "pass" => Ok(Self::Pass),
            other => Err(UnknownDecisionKind(other.to_owned())),
        }
    }
}
