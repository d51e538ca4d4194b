use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Mapping from question index to the option key the user selected.
pub type QuizAnswers = HashMap<usize, String>;

/// The four fixed options of a multiple-choice question, keyed A-D on the
/// wire.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuizOptions {
    #[serde(rename = "A")]
    pub a: String,
    #[serde(rename = "B")]
    pub b: String,
    #[serde(rename = "C")]
    pub c: String,
    #[serde(rename = "D")]
    pub d: String,
}

impl QuizOptions {
    pub const KEYS: [&'static str; 4] = ["A", "B", "C", "D"];

    pub fn get(&self, key: &str) -> Option<&str> {
        match key {
            "A" => Some(&self.a),
            "B" => Some(&self.b),
            "C" => Some(&self.c),
            "D" => Some(&self.d),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuizQuestion {
    pub question: String,
    pub options: QuizOptions,
    pub correct_answer: String,
    pub explanation: String,
}

/// Immutable per-question verdict computed once at submission time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct QuizResult {
    pub question: String,
    pub user_answer: String,
    pub correct_answer: String,
    pub is_correct: bool,
    pub explanation: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> QuizOptions {
        QuizOptions {
            a: "Light to energy".to_string(),
            b: "Energy to light".to_string(),
            c: "Water to oxygen".to_string(),
            d: "CO2 to light".to_string(),
        }
    }

    #[test]
    fn options_lookup_by_key() {
        let opts = options();
        assert_eq!(opts.get("A"), Some("Light to energy"));
        assert_eq!(opts.get("D"), Some("CO2 to light"));
        assert_eq!(opts.get("E"), None);
        assert_eq!(opts.get("a"), None);
    }

    #[test]
    fn options_deserialize_from_upper_case_keys() {
        let json = r#"{"A":"1","B":"2","C":"3","D":"4"}"#;
        let opts: QuizOptions = serde_json::from_str(json).expect("options should deserialize");
        assert_eq!(opts.get("B"), Some("2"));
    }

    #[test]
    fn options_reject_missing_key() {
        let json = r#"{"A":"1","B":"2","C":"3"}"#;
        assert!(serde_json::from_str::<QuizOptions>(json).is_err());
    }
}
