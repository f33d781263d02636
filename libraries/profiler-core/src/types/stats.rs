/// Aggregate counts over the profile list
use super::profile::Profile;
use serde::Serialize;
use std::collections::BTreeMap;

const UNSPECIFIED: &str = "unspecified";

/// Record counts per occupation and per gender
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProfileStats {
    pub total: usize,
    pub occupations: BTreeMap<String, usize>,
    pub genders: BTreeMap<String, usize>,
}

impl ProfileStats {
    pub fn from_profiles(profiles: &[Profile]) -> Self {
        let mut stats = Self {
            total: profiles.len(),
            ..Self::default()
        };

        for profile in profiles {
            let occupation = profile.fields.get("occupation").unwrap_or(UNSPECIFIED);
            *stats.occupations.entry(occupation.to_string()).or_default() += 1;

            let gender = profile.fields.get("gender").unwrap_or(UNSPECIFIED);
            *stats.genders.entry(gender.to_string()).or_default() += 1;
        }

        stats
    }
}
