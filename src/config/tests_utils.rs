//! Shared test utilities for config module tests.

use std::sync::Mutex;

use super::env_parser::{
    COMMIT_THRESHOLD_VAR, HINT_THRESHOLD_VAR, MAX_PROMPT_CHARS_VAR, MIN_PROMPT_WORDS_VAR,
    PREFERENCES_PATH_VAR,
};

/// Every variable read by the config overrides.
const ALL_VARS: [&str; 5] = [
    COMMIT_THRESHOLD_VAR,
    HINT_THRESHOLD_VAR,
    PREFERENCES_PATH_VAR,
    MIN_PROMPT_WORDS_VAR,
    MAX_PROMPT_CHARS_VAR,
];

/// Mutex to serialize environment variable tests and prevent race conditions.
pub static ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Set an environment variable. Callers must hold `ENV_MUTEX`.
pub fn set_var(name: &str, value: &str) {
    // SAFETY: env-mutating tests are serialized by ENV_MUTEX.
    unsafe { std::env::set_var(name, value) };
}

/// Remove an environment variable. Callers must hold `ENV_MUTEX`.
pub fn remove_var(name: &str) {
    // SAFETY: env-mutating tests are serialized by ENV_MUTEX.
    unsafe { std::env::remove_var(name) };
}

/// Clean up environment variables used by swiperate config.
pub fn cleanup_env_vars() {
    for var in ALL_VARS {
        remove_var(var);
    }
}
