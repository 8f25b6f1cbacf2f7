//! App-facing user projection.

use userdeck_net::users::{AddressRecord, UserRecord};

/// Postal address as shown to the user. Coordinates are not carried over.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DisplayAddress {
    pub street: String,
    pub suite: String,
    pub city: String,
    pub zipcode: String,
}

impl DisplayAddress {
    /// Single-line rendering: `street, suite, city zipcode`.
    pub fn one_line(&self) -> String {
        format!("{}, {}, {} {}", self.street, self.suite, self.city, self.zipcode)
    }
}

impl From<AddressRecord> for DisplayAddress {
    fn from(record: AddressRecord) -> Self {
        Self {
            street: record.street,
            suite: record.suite,
            city: record.city,
            zipcode: record.zipcode,
        }
    }
}

/// A user as presented in the list and detail views.
///
/// Two users are the same user when their `id`s match; the image URLs are
/// attached from configuration and are not part of the wire record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayUser {
    pub id: i64,
    pub name: String,
    pub username: String,
    pub email: String,
    pub phone: String,
    pub website: String,
    pub address: DisplayAddress,
    pub thumbnail_url: String,
    pub detail_image_url: String,
}

impl DisplayUser {
    /// Project a wire record, attaching the given avatar URLs.
    pub fn from_record(
        record: UserRecord,
        thumbnail_url: impl Into<String>,
        detail_image_url: impl Into<String>,
    ) -> Self {
        Self {
            id: record.id,
            name: record.name,
            username: record.username,
            email: record.email,
            phone: record.phone,
            website: record.website,
            address: record.address.into(),
            thumbnail_url: thumbnail_url.into(),
            detail_image_url: detail_image_url.into(),
        }
    }

    /// Whether `other` refers to the same user.
    pub fn same_user(&self, other: &DisplayUser) -> bool {
        self.id == other.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use userdeck_net::users::{CompanyRecord, GeoRecord};

    fn record() -> UserRecord {
        UserRecord {
            id: 7,
            name: "Kurtis Weissnat".into(),
            username: "Elwyn.Skiles".into(),
            email: "Telly.Hoeger@billy.biz".into(),
            address: AddressRecord {
                street: "Rex Trail".into(),
                suite: "Suite 280".into(),
                city: "Howemouth".into(),
                zipcode: "58804-1099".into(),
                geo: GeoRecord {
                    lat: "24.8918".into(),
                    lng: "21.8984".into(),
                },
            },
            phone: "210.067.6132".into(),
            website: "elvis.io".into(),
            company: CompanyRecord {
                name: "Johns Group".into(),
                catch_phrase: "Configurable multimedia task-force".into(),
                bs: "generate enterprise e-tailers".into(),
            },
        }
    }

    #[test]
    fn test_from_record() {
        let user = DisplayUser::from_record(record(), "http://t", "http://d");
        assert_eq!(user.id, 7);
        assert_eq!(user.username, "Elwyn.Skiles");
        assert_eq!(user.address.city, "Howemouth");
        assert_eq!(user.thumbnail_url, "http://t");
        assert_eq!(user.detail_image_url, "http://d");
    }

    #[test]
    fn test_address_one_line() {
        let user = DisplayUser::from_record(record(), "", "");
        assert_eq!(
            user.address.one_line(),
            "Rex Trail, Suite 280, Howemouth 58804-1099"
        );
    }

    #[test]
    fn test_same_user_by_id() {
        let a = DisplayUser::from_record(record(), "a", "a");
        let mut b = DisplayUser::from_record(record(), "b", "b");
        assert!(a.same_user(&b));
        b.id = 8;
        assert!(!a.same_user(&b));
    }
}
