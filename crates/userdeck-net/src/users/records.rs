//! Wire shapes returned by the users endpoint.

use serde::{Deserialize, Serialize};

/// One user as returned by `GET /users`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Unique user ID.
    pub id: i64,
    /// Full name.
    pub name: String,
    /// Login handle.
    pub username: String,
    /// Email address.
    pub email: String,
    /// Postal address.
    pub address: AddressRecord,
    /// Phone number, free-form.
    pub phone: String,
    /// Website host, without scheme.
    pub website: String,
    /// Employer.
    pub company: CompanyRecord,
}

/// Postal address of a [`UserRecord`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressRecord {
    pub street: String,
    pub suite: String,
    pub city: String,
    pub zipcode: String,
    pub geo: GeoRecord,
}

/// Coordinates, transmitted as decimal strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeoRecord {
    pub lat: String,
    pub lng: String,
}

/// Employer of a [`UserRecord`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyRecord {
    pub name: String,
    pub catch_phrase: String,
    pub bs: String,
}

/// Error body some servers send with non-2xx responses.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub(crate) message: Option<String>,
}
