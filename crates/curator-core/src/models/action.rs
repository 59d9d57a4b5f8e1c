use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Recommended disposition of a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Action {
    /// The current topic is the best (or tied-best) fit.
    Keep,
    /// Another topic strictly out-scores the current one.
    Move,
    /// Several other topics tie for the lead; needs human judgment.
    Eval,
}

impl Action {
    pub const ALL: [Action; 3] = [Action::Keep, Action::Move, Action::Eval];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Keep => "KEEP",
            Self::Move => "MOVE",
            Self::Eval => "EVAL",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "KEEP" => Ok(Self::Keep),
            "MOVE" => Ok(Self::Move),
            "EVAL" => Ok(Self::Eval),
            other => Err(format!("unknown action '{other}'")),
        }
    }
}
