//! Conversion of the raw wire tree into the domain model.
//!
//! Every coercion here is total: a value that is missing or does not parse
//! becomes a default (0, empty string, `None` date) and never an error.

use chrono::NaiveDate;

use crate::{
    types::{MembershipSite, Occupation, Person},
    wire::{WireMembership, WireOccupation, WirePerson},
};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Integer attribute; 0 when absent or not a number.
pub fn coerce_int(value: Option<&str>) -> i64 {
    value.and_then(|v| v.parse().ok()).unwrap_or(0)
}

/// `YYYY-MM-DD` date; `None` when absent or malformed.
pub fn coerce_date(value: Option<&str>) -> Option<NaiveDate> {
    value.and_then(|v| NaiveDate::parse_from_str(v, DATE_FORMAT).ok())
}

/// Lower-cased string; empty when absent.
pub fn coerce_lower(value: Option<&str>) -> String {
    value.map(str::to_lowercase).unwrap_or_default()
}

fn coerce_string(value: Option<String>) -> String {
    value.unwrap_or_default()
}

impl From<WireOccupation> for Occupation {
    fn from(val: WireOccupation) -> Self {
        Occupation {
            company: coerce_string(val.company),
            job_title: coerce_string(val.job_title),
        }
    }
}

impl From<WireMembership> for MembershipSite {
    fn from(val: WireMembership) -> Self {
        MembershipSite {
            num_friends: coerce_int(val.num_friends.as_deref()),
            num_followers: coerce_int(val.num_followers.as_deref()),
            num_followed: coerce_int(val.num_followed.as_deref()),
            site: coerce_string(val.site),
            exists: coerce_string(val.exists),
            profile_url: coerce_string(val.profile_url),
            image_url: coerce_string(val.image_url),
        }
    }
}

impl From<WirePerson> for Person {
    fn from(val: WirePerson) -> Self {
        let basics = val.basics;

        // Only the first group is consumed; later groups are dropped.
        let occupations = basics
            .occupations
            .into_iter()
            .next()
            .map(|group| group.entries.into_iter().map(Occupation::from).collect())
            .unwrap_or_default();

        let memberships = val
            .memberships
            .primary
            .entries
            .into_iter()
            .chain(val.memberships.supplemental.entries)
            .map(MembershipSite::from)
            .collect();

        Person {
            id: val.id,
            gender: coerce_lower(basics.gender.as_deref()),
            num_friends: coerce_int(basics.num_friends.as_deref()),
            age: coerce_int(basics.age.as_deref()),
            earliest_known_activity: coerce_date(basics.earliest_known_activity.as_deref()),
            latest_known_activity: coerce_date(basics.latest_known_activity.as_deref()),
            name: coerce_string(basics.name),
            location: coerce_string(basics.location),
            occupations,
            memberships,
            email_address: String::new(),
        }
    }
}
