use std::env;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Supabase project base URL, e.g. `https://xyzcompany.supabase.co`.
    pub supabase_url: String,
    /// Supabase anon key, sent as both `apikey` and bearer token.
    pub supabase_anon_key: String,
}

impl Config {
    /// Load configuration from environment variables.
    /// Panics with a clear message if required vars are missing.
    pub fn from_env() -> Self {
        Self {
            supabase_url: required_env("SUPABASE_URL"),
            supabase_anon_key: required_env("SUPABASE_ANON_KEY"),
        }
    }
}

fn required_env(key: &str) -> String {
    env::var(key).unwrap_or_else(|_| panic!("{key} environment variable is required"))
}
