use chrono::{DateTime, Utc};
use serde::de::{Deserializer, IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Serialize};

use clientele_core::{CustomerId, DomainError, DomainResult};

use crate::number::string_or_integer;

/// Returned (as the 400 body) when delete/update get no email.
const MISSING_EMAIL: &str = "Missing customer email";

/// Client-supplied customer fields, as decoded from a request body.
///
/// Decoding is lenient: field names match case-insensitively, the last
/// occurrence of a field wins, unknown fields are ignored, and missing or
/// `null` fields leave the value empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CustomerDetails {
    pub name: String,
    pub email: String,
    pub address: String,
    pub number: String,
}

impl CustomerDetails {
    /// The lookup key for delete/update. Must be non-empty.
    pub fn require_email(&self) -> DomainResult<&str> {
        if self.email.is_empty() {
            return Err(DomainError::validation(MISSING_EMAIL));
        }
        Ok(&self.email)
    }
}

/// `number` through the string-or-integer decoder.
struct NumberText(String);

impl<'de> Deserialize<'de> for NumberText {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        string_or_integer(deserializer).map(NumberText)
    }
}

impl<'de> Deserialize<'de> for CustomerDetails {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct DetailsVisitor;

        impl<'de> Visitor<'de> for DetailsVisitor {
            type Value = CustomerDetails;

            fn expecting(&self, formatter: &mut core::fmt::Formatter) -> core::fmt::Result {
                formatter.write_str("a customer object")
            }

            fn visit_map<V>(self, mut map: V) -> Result<CustomerDetails, V::Error>
            where
                V: MapAccess<'de>,
            {
                let mut details = CustomerDetails::default();

                while let Some(key) = map.next_key::<String>()? {
                    let slot = match key.to_lowercase().as_str() {
                        "name" => &mut details.name,
                        "email" => &mut details.email,
                        "address" => &mut details.address,
                        "number" => {
                            if let Some(NumberText(n)) = map.next_value::<Option<NumberText>>()? {
                                details.number = n;
                            }
                            continue;
                        }
                        _ => {
                            map.next_value::<IgnoredAny>()?;
                            continue;
                        }
                    };
                    // null leaves the field as it was
                    if let Some(value) = map.next_value::<Option<String>>()? {
                        *slot = value;
                    }
                }

                Ok(details)
            }
        }

        deserializer.deserialize_map(DetailsVisitor)
    }
}

/// A stored customer record.
///
/// `email` is the key handlers look records up by; `id` and the timestamps
/// are assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub name: String,
    pub email: String,
    pub address: String,
    pub number: String,
}

impl Customer {
    /// Build a freshly created record from client details.
    pub fn new(id: CustomerId, details: CustomerDetails, now: DateTime<Utc>) -> Self {
        Self {
            id,
            created_at: now,
            updated_at: now,
            name: details.name,
            email: details.email,
            address: details.address,
            number: details.number,
        }
    }

    /// Full replace: overwrite every client field with the new values.
    ///
    /// `id` and `created_at` keep their stored values.
    pub fn replace_details(&mut self, details: CustomerDetails) {
        self.name = details.name;
        self.email = details.email;
        self.address = details.address;
        self.number = details.number;
    }

    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now;
    }
}
