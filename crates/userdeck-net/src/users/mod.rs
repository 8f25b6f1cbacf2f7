//! The users resource.
//!
//! [`UsersService`] issues `GET <base>/users`, decodes the JSON array into
//! [`UserRecord`]s, and maps HTTP statuses onto [`NetworkError`](crate::NetworkError).
//!
//! ```ignore
//! use userdeck_net::users::{UsersApi, UsersService};
//!
//! let service = UsersService::with_defaults()?;
//! for user in service.fetch_users().await? {
//!     println!("{} (@{})", user.name, user.username);
//! }
//! ```

mod contract;
mod records;
mod service;

pub use contract::{users_endpoint, DEFAULT_BASE_URL, USERS_PATH};
pub use records::{AddressRecord, CompanyRecord, GeoRecord, UserRecord};
pub use service::{decode_response, UsersApi, UsersService, UNKNOWN_ERROR_MESSAGE};
