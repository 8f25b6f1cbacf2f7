//! Endpoint definition for the users resource.

use url::Url;

use crate::error::Result;

/// Base URL of the public users API.
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com/";

/// Path of the users collection, relative to the base URL.
pub const USERS_PATH: &str = "users";

/// Resolve the users endpoint against `base_url`.
///
/// The base is treated as a directory whether or not it ends in `/`, so
/// `https://host/api` and `https://host/api/` both resolve to
/// `https://host/api/users`.
pub fn users_endpoint(base_url: &str) -> Result<Url> {
    let mut base = Url::parse(base_url)?;
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    Ok(base.join(USERS_PATH)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoint() {
        let url = users_endpoint(DEFAULT_BASE_URL).unwrap();
        assert_eq!(url.as_str(), "https://jsonplaceholder.typicode.com/users");
    }

    #[test]
    fn test_trailing_slash_normalization() {
        let with = users_endpoint("http://127.0.0.1:8080/api/").unwrap();
        let without = users_endpoint("http://127.0.0.1:8080/api").unwrap();
        assert_eq!(with, without);
        assert_eq!(with.as_str(), "http://127.0.0.1:8080/api/users");
    }

    #[test]
    fn test_invalid_base_url() {
        assert!(users_endpoint("::not a url::").is_err());
    }
}
