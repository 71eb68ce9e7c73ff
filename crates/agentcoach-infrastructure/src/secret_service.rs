//! API key loading.
//!
//! The key is read once at start-up from the environment (a `.env` file in
//! the working directory is honored). A missing key is not an error here;
//! model calls report it when they are attempted.

/// Loads `.env` (if present) and reads `env_var`.
///
/// Blank values count as missing. The key itself is never logged.
pub fn load_api_key(env_var: &str) -> Option<String> {
    match dotenvy::dotenv() {
        Ok(path) => tracing::debug!(path = %path.display(), "loaded .env"),
        Err(err) if err.not_found() => {}
        Err(err) => tracing::warn!(error = %err, "failed to read .env"),
    }
    read_api_key(env_var)
}

/// Reads `env_var` without touching `.env`.
pub fn read_api_key(env_var: &str) -> Option<String> {
    let key = std::env::var(env_var)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty());

    if key.is_none() {
        tracing::warn!(env_var, "API key not set; model calls will fail until it is provided");
    }
    key
}
