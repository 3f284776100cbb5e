use std::env;

const DEFAULT_COUNTER_URL: &str = "https://services.iraiser.eu/counter-api/restosducoeur";
const DEFAULT_GOAL: i64 = 100_000;

#[derive(Debug, Clone)]
pub struct Config {
    /// Fundraising goal for 2025 in euros. Never zero: the default applies
    /// when the variable is unset or unparsable.
    pub goal: i64,
    /// Additive correction for known upstream undercounts
    pub adjustment: i64,
    /// iRaiser counter endpoint
    pub counter_url: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            goal: env_int("IRAISER_GOAL_2025", DEFAULT_GOAL),
            adjustment: env_int("IRAISER_ADD_2025", 0),
            counter_url: env::var("IRAISER_COUNTER_URL")
                .unwrap_or_else(|_| DEFAULT_COUNTER_URL.to_string()),
        }
    }
}

/// Integer environment variable with a silent fallback when the value is
/// unset or unparsable.
fn env_int(key: &str, default: i64) -> i64 {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
