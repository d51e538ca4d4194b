use serde::{Deserialize, Serialize};

/// One of the three fixed generation tasks. The wire key doubles as the
/// configuration lookup key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scenario {
    Explanation,
    Quiz,
    Notes,
}

impl Scenario {
    pub const ALL: [Scenario; 3] = [Scenario::Explanation, Scenario::Quiz, Scenario::Notes];

    pub fn key(&self) -> &'static str {
        match self {
            Scenario::Explanation => "explanation",
            Scenario::Quiz => "quiz",
            Scenario::Notes => "notes",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "explanation" => Some(Scenario::Explanation),
            "quiz" => Some(Scenario::Quiz),
            "notes" => Some(Scenario::Notes),
            _ => None,
        }
    }
}

impl std::fmt::Display for Scenario {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// In-flight state tracked independently per scenario. A single
/// "any pending" boolean is derived for the UI rather than shared.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScenarioStatus {
    #[default]
    Idle,
    Pending,
    Done,
    Failed,
}
