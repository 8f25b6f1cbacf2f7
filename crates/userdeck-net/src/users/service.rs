//! The users wire client.

use std::future::Future;

use serde::de::DeserializeOwned;
use url::Url;
use userdeck_core::logging::targets;

use super::contract::{users_endpoint, DEFAULT_BASE_URL};
use super::records::{ErrorBody, UserRecord};
use crate::error::{NetworkError, Result};
use crate::http::HttpClient;

/// Message used when a failed response carries no readable `message` field.
pub const UNKNOWN_ERROR_MESSAGE: &str = "Unknown error occurred";

/// Source of user records.
///
/// One call is one request: implementations never retry.
pub trait UsersApi: Send + Sync {
    /// Fetch every user.
    fn fetch_users(&self) -> impl Future<Output = Result<Vec<UserRecord>>> + Send;
}

/// HTTP implementation of [`UsersApi`] against `GET <base>/users`.
#[derive(Debug, Clone)]
pub struct UsersService {
    client: HttpClient,
    endpoint: Url,
}

impl UsersService {
    /// Create a service for `base_url` using `client` for transport.
    pub fn new(client: HttpClient, base_url: &str) -> Result<Self> {
        Ok(Self {
            client,
            endpoint: users_endpoint(base_url)?,
        })
    }

    /// Create a service for the public API with a default client.
    pub fn with_defaults() -> Result<Self> {
        Self::new(HttpClient::with_defaults()?, DEFAULT_BASE_URL)
    }

    /// The resolved endpoint URL.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl UsersApi for UsersService {
    async fn fetch_users(&self) -> Result<Vec<UserRecord>> {
        tracing::info!(target: targets::USERS, endpoint = %self.endpoint, "fetching users");

        let response = self
            .client
            .get(self.endpoint.as_str())
            .header("Accept", "application/json")
            .send()
            .await
            .inspect_err(|err| {
                tracing::warn!(target: targets::USERS, error = %err, "users request failed");
            })?;

        let status = response.status();
        let body = response.bytes().await?;
        let users: Vec<UserRecord> = decode_response(status, &body).inspect_err(|err| {
            tracing::warn!(target: targets::USERS, status, error = %err, "users response rejected");
        })?;

        tracing::info!(target: targets::USERS, count = users.len(), "users fetched");
        Ok(users)
    }
}

/// Classify a response by status and decode its body.
///
/// - 2xx: the body is decoded as `T`.
/// - 401: [`NetworkError::Unauthorized`].
/// - anything else: [`NetworkError::BadResponse`] carrying the body's
///   `message` field, or [`UNKNOWN_ERROR_MESSAGE`] when there is none.
pub fn decode_response<T: DeserializeOwned>(status: u16, body: &[u8]) -> Result<T> {
    match status {
        200..=299 => Ok(serde_json::from_slice(body)?),
        401 => Err(NetworkError::Unauthorized),
        _ => {
            let message = serde_json::from_slice::<ErrorBody>(body)
                .ok()
                .and_then(|body| body.message)
                .unwrap_or_else(|| UNKNOWN_ERROR_MESSAGE.to_string());
            Err(NetworkError::BadResponse { status, message })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_decodes_array() {
        let users: Vec<serde_json::Value> = decode_response(200, b"[{}, {}]").unwrap();
        assert_eq!(users.len(), 2);
    }

    #[test]
    fn test_success_with_bad_body_is_decode_error() {
        let err = decode_response::<Vec<UserRecord>>(200, b"{\"not\": \"an array\"}").unwrap_err();
        assert!(err.is_decode());
    }

    #[test]
    fn test_unauthorized() {
        let err = decode_response::<Vec<UserRecord>>(401, b"{\"message\": \"nope\"}").unwrap_err();
        assert_eq!(err, NetworkError::Unauthorized);
    }

    #[test]
    fn test_bad_response_uses_body_message() {
        let err = decode_response::<Vec<UserRecord>>(404, br#"{"message": "Not here"}"#).unwrap_err();
        assert_eq!(
            err,
            NetworkError::BadResponse {
                status: 404,
                message: "Not here".into()
            }
        );
    }

    #[test]
    fn test_bad_response_defaults_message() {
        let bodies: [&[u8]; 4] = [b"<html>oops</html>", b"{}", b"{\"message\": 42}", b""];
        for body in bodies {
            let err = decode_response::<Vec<UserRecord>>(500, body).unwrap_err();
            assert_eq!(
                err,
                NetworkError::BadResponse {
                    status: 500,
                    message: UNKNOWN_ERROR_MESSAGE.into()
                }
            );
        }
    }
}
