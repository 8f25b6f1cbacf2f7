//! HTTP client for Userdeck.
//!
//! Only GET is needed: the users endpoint is read-only. Every failure surfaces
//! as a [`NetworkError`](crate::NetworkError) and every request is logged
//! under the `userdeck_net::http` target.
//!
//! # Example
//!
//! ```ignore
//! use userdeck_net::http::HttpClient;
//!
//! let client = HttpClient::builder()
//!     .timeout(Duration::from_secs(10))
//!     .user_agent("MyApp/1.0")
//!     .build()?;
//!
//! let response = client
//!     .get("https://jsonplaceholder.typicode.com/users")
//!     .header("Accept", "application/json")
//!     .send()
//!     .await?;
//! println!("Status: {}", response.status());
//! ```

mod client;
mod request;
mod response;

pub use client::{HttpClient, HttpClientBuilder, HttpClientConfig};
pub use request::{HttpRequest, HttpRequestBuilder};
pub use response::HttpResponse;
