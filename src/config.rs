use std::{env, path::PathBuf};

/// Startup configuration, built once in `main` and passed down explicitly.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub data_path: PathBuf,
    pub utc_offset_hours: i32,
}

impl Config {
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(8080);

        let data_path = env::var("APP_DATA_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("data/health.json"));

        let utc_offset_hours = env::var("APP_UTC_OFFSET_HOURS")
            .ok()
            .and_then(|value| value.parse::<i32>().ok())
            .unwrap_or(9);

        Self {
            port,
            data_path,
            utc_offset_hours,
        }
    }
}
