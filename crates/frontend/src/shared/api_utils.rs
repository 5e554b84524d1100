//! API utilities for frontend-backend communication
//!
//! The procurement API lives on a separate host, so the base URL is fixed at
//! build time instead of being derived from `window.location`.

/// Default versioned base URL of the procurement API
pub const DEFAULT_API_BASE: &str = "https://skc-api-production.up.railway.app/api/v1";

/// Get the base URL for API requests
///
/// Taken from `REQUISITIONS_API_URL` at compile time (e.g.
/// `REQUISITIONS_API_URL=http://localhost:8080/api/v1 trunk serve`), otherwise
/// [`DEFAULT_API_BASE`]. Trailing slashes are removed.
pub fn api_base() -> String {
    normalize_base(option_env!("REQUISITIONS_API_URL").unwrap_or(DEFAULT_API_BASE))
}

fn normalize_base(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_API_BASE.to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_base() {
        assert_eq!(normalize_base("http://localhost:8080/api/v1/"), "http://localhost:8080/api/v1");
        assert_eq!(normalize_base("  "), DEFAULT_API_BASE);
    }
}
