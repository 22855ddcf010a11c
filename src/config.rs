use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use dotenvy::dotenv;

use crate::collections::stack::DEFAULT_CAPACITY;

#[derive(Debug, Clone)]
pub struct Config {
    pub server_addr: String,

    // Flat files, one record per line
    pub employees_file: PathBuf,
    pub leave_requests_file: PathBuf,
    pub attendance_file: PathBuf,

    /// Capacity of each of the undo and redo stacks
    pub history_capacity: usize,

    // Rate limiting
    pub rate_protected_per_min: u32,

    pub api_prefix: String,
    pub log_dir: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_addr: "127.0.0.1:8080".to_string(),
            employees_file: PathBuf::from("employees.txt"),
            leave_requests_file: PathBuf::from("leave_requests.txt"),
            attendance_file: PathBuf::from("attendance.txt"),
            history_capacity: DEFAULT_CAPACITY,
            rate_protected_per_min: 1000,
            api_prefix: "/api".to_string(),
            log_dir: "logs".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();
        let defaults = Self::default();

        Self {
            server_addr: env::var("SERVER_ADDR").unwrap_or(defaults.server_addr),
            employees_file: env::var("EMPLOYEES_FILE")
                .map(PathBuf::from)
                .unwrap_or(defaults.employees_file),
            leave_requests_file: env::var("LEAVE_REQUESTS_FILE")
                .map(PathBuf::from)
                .unwrap_or(defaults.leave_requests_file),
            attendance_file: env::var("ATTENDANCE_FILE")
                .map(PathBuf::from)
                .unwrap_or(defaults.attendance_file),
            history_capacity: parsed("HISTORY_CAPACITY", defaults.history_capacity),
            rate_protected_per_min: parsed(
                "RATE_PROTECTED_PER_MIN",
                defaults.rate_protected_per_min,
            ),
            api_prefix: env::var("API_PREFIX").unwrap_or(defaults.api_prefix),
            log_dir: env::var("LOG_DIR").unwrap_or(defaults.log_dir),
        }
    }
}

/// Reads `key`, falling back to `default` when unset or unparseable.
fn parsed<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}
