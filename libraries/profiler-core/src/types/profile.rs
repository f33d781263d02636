/// Profile record domain types
use super::ids::ProfileId;
use crate::error::{ProfilerError, Result};
use crate::traits::FieldMap;
use serde::{Deserialize, Deserializer, Serialize};

/// Known profile fields, in form order
pub const PROFILE_FIELDS: [&str; 7] = [
    "name",
    "gender",
    "age",
    "address",
    "occupation",
    "religion",
    "status",
];

/// Field name to text value map of a single profile
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProfileFields(FieldMap);

impl ProfileFields {
    /// Create an empty field set
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a field value
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    /// Set a field value, replacing any previous value
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.0.insert(field.into(), value.into());
    }

    /// Overwrite fields with the ones in `other`, keeping the rest
    pub fn merge(&mut self, other: ProfileFields) {
        self.0.extend(other.0);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate `(field, value)` pairs in field-name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Borrow the raw map for storage writes
    pub fn as_map(&self) -> &FieldMap {
        &self.0
    }
}

impl From<FieldMap> for ProfileFields {
    fn from(map: FieldMap) -> Self {
        Self(map)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ProfileFields {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// A profile record: the id plus its stored fields
///
/// Serializes flat, e.g. `{"id": "1", "name": "Alice", ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: ProfileId,

    #[serde(flatten)]
    pub fields: ProfileFields,
}

impl Profile {
    pub fn new(id: ProfileId, fields: ProfileFields) -> Self {
        Self { id, fields }
    }

    /// Case-insensitive substring match against the id and every field value
    pub fn matches(&self, query: &str) -> bool {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }

        self.id.as_str().to_lowercase().contains(&needle)
            || self
                .fields
                .iter()
                .any(|(_, value)| value.to_lowercase().contains(&needle))
    }
}

/// Input for creating a profile
///
/// Every field is optional at the wire level so that a missing field becomes
/// a validation error instead of a deserialization failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateProfile {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default, deserialize_with = "deserialize_text_or_number")]
    pub age: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub occupation: Option<String>,
    #[serde(default)]
    pub religion: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

impl CreateProfile {
    /// Require every known field to be present and non-empty
    pub fn validate(self) -> Result<ProfileFields> {
        let values = [
            self.name,
            self.gender,
            self.age,
            self.address,
            self.occupation,
            self.religion,
            self.status,
        ];

        let mut fields = ProfileFields::new();
        for (field, value) in PROFILE_FIELDS.iter().zip(values) {
            match value {
                Some(value) if !value.trim().is_empty() => fields.insert(*field, value),
                _ => return Err(ProfilerError::validation(format!("{field} is required"))),
            }
        }

        Ok(fields)
    }
}

/// Partial update input; omitted or empty fields are left unchanged
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProfile {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default, deserialize_with = "deserialize_text_or_number")]
    pub age: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub occupation: Option<String>,
    #[serde(default)]
    pub religion: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

impl UpdateProfile {
    /// Only the supplied, non-empty fields
    pub fn into_fields(self) -> ProfileFields {
        let values = [
            self.name,
            self.gender,
            self.age,
            self.address,
            self.occupation,
            self.religion,
            self.status,
        ];

        PROFILE_FIELDS
            .iter()
            .zip(values)
            .filter_map(|(field, value)| {
                value
                    .filter(|v| !v.trim().is_empty())
                    .map(|v| (*field, v))
            })
            .collect()
    }
}

/// Accept either a JSON string or a JSON number and keep it as text
///
/// Used for `age`, and by the HTTP layer for ids.
pub fn deserialize_text_or_number<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum TextOrNumber {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(
        Option::<TextOrNumber>::deserialize(deserializer)?.map(|value| match value {
            TextOrNumber::Text(text) => text,
            TextOrNumber::Number(number) => number.to_string(),
        }),
    )
}
