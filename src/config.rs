use std::env;

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    /// Seconds between background sweeps that expire overdue active passes.
    pub expiry_sweep_secs: u64,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_URL").expect("DATABASE_URL must be set"),
            port: env::var("PORT").unwrap_or_else(|_| "3000".to_string()).parse().expect("PORT must be a number"),
            expiry_sweep_secs: env::var("EXPIRY_SWEEP_SECS").unwrap_or_else(|_| "60".to_string()).parse().expect("EXPIRY_SWEEP_SECS must be a number"),
        }
    }
}
