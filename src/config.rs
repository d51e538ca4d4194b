use std::collections::HashMap;
use std::env;

use secrecy::SecretString;

use crate::constants::prompts;
use crate::models::domain::Scenario;

/// Per-scenario generation settings, immutable once loaded.
#[derive(Clone, Debug)]
pub struct GenerationConfig {
    pub model: String,
    pub system_prompt: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub web_server_host: String,
    pub web_server_port: u16,
    pub completion_api_base: String,
    pub completion_api_key: SecretString,
    pub scenarios: HashMap<Scenario, GenerationConfig>,
}

impl Config {
    pub fn from_env() -> Self {
        let mut scenarios = HashMap::new();
        scenarios.insert(
            Scenario::Explanation,
            scenario_from_env("EXPLANATION", prompts::EXPLANATION_SYSTEM_PROMPT, 0.7, 1000),
        );
        scenarios.insert(
            Scenario::Quiz,
            scenario_from_env("QUIZ", prompts::QUIZ_SYSTEM_PROMPT, 0.5, 1500),
        );
        scenarios.insert(
            Scenario::Notes,
            scenario_from_env("NOTES", prompts::NOTES_SYSTEM_PROMPT, 0.7, 1200),
        );

        Self {
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "localhost".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            completion_api_base: env::var("COMPLETION_API_BASE")
                .unwrap_or_else(|_| "https://api.openai.com/v1".to_string()),
            completion_api_key: SecretString::from(
                env::var("COMPLETION_API_KEY")
                    .unwrap_or_else(|_| "dev_api_key_change_in_production".to_string()),
            ),
            scenarios,
        }
    }

    /// Validate that production-critical configuration is set.
    /// Panics if the completion API key is using the default value.
    pub fn validate_for_production(&self) {
        use secrecy::ExposeSecret;

        if self.completion_api_key.expose_secret() == "dev_api_key_change_in_production" {
            panic!(
                "FATAL: COMPLETION_API_KEY is using default value! Set COMPLETION_API_KEY environment variable."
            );
        }
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        let mut scenarios = HashMap::new();
        for scenario in Scenario::ALL {
            scenarios.insert(
                scenario,
                GenerationConfig {
                    model: "test-model".to_string(),
                    system_prompt: format!("You are the {} assistant.", scenario),
                    temperature: 0.5,
                    max_tokens: 256,
                },
            );
        }

        Self {
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
            completion_api_base: "http://localhost:1".to_string(),
            completion_api_key: SecretString::from("test_api_key".to_string()),
            scenarios,
        }
    }
}

fn scenario_from_env(
    prefix: &str,
    default_prompt: &str,
    default_temperature: f32,
    default_max_tokens: u32,
) -> GenerationConfig {
    GenerationConfig {
        model: env::var(format!("{}_MODEL", prefix))
            .unwrap_or_else(|_| "gpt-4o-mini".to_string()),
        system_prompt: env::var(format!("{}_SYSTEM_PROMPT", prefix))
            .unwrap_or_else(|_| default_prompt.to_string()),
        temperature: env::var(format!("{}_TEMPERATURE", prefix))
            .ok()
            .and_then(|t| t.parse().ok())
            .unwrap_or(default_temperature),
        max_tokens: env::var(format!("{}_MAX_TOKENS", prefix))
            .ok()
            .and_then(|t| t.parse().ok())
            .unwrap_or(default_max_tokens),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_env_covers_all_scenarios() {
        let config = Config::from_env();

        for scenario in Scenario::ALL {
            let generation = config
                .scenarios
                .get(&scenario)
                .expect("every scenario should have a config entry");
            assert!(!generation.model.is_empty());
            assert!(!generation.system_prompt.is_empty());
            assert!(generation.max_tokens > 0);
        }
    }

    #[test]
    fn test_test_config() {
        let config = Config::test_config();

        assert_eq!(config.web_server_host, "127.0.0.1");
        assert_eq!(config.scenarios.len(), 3);
        assert_eq!(config.scenarios[&Scenario::Quiz].model, "test-model");
    }
}
