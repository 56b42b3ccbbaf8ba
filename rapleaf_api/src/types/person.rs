//! The normalized person record returned by lookups.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{MembershipSite, Occupation};
use crate::{wire::WirePerson, Error};

/// A person as known to the vendor.
///
/// Fields absent from the source document are empty strings, zero counts, or
/// `None` dates. Only [`email_address`](Self::email_address) is ever touched
/// after normalization, and only by [`Client::person_by_email`](crate::Client::person_by_email).
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Person {
    /// Vendor-assigned identifier.
    pub id: String,

    pub name: String,

    /// Lower-cased, not validated.
    pub gender: String,

    pub location: String,

    pub num_friends: i64,

    pub age: i64,

    pub earliest_known_activity: Option<NaiveDate>,

    pub latest_known_activity: Option<NaiveDate>,

    /// Entries of the first occupation group, in document order.
    pub occupations: Vec<Occupation>,

    /// Primary memberships followed by supplemental ones, each in document order.
    pub memberships: Vec<MembershipSite>,

    /// The queried address for email lookups, empty otherwise.
    pub email_address: String,
}

impl Person {
    /// Parses and normalizes a person document.
    ///
    /// Returns `Ok(None)` for an empty body, [`Error::Parse`] for malformed
    /// XML and [`Error::UnexpectedRoot`] for a document that is not a person.
    pub fn from_xml(xml: &str) -> Result<Option<Person>, Error> {
        Ok(WirePerson::from_xml(xml)?.map(Person::from))
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Person{{id:{:?}, name:{:?}, gender:{:?}, location:{:?}, num_friends:{}, age:{}, ",
            self.id, self.name, self.gender, self.location, self.num_friends, self.age
        )?;
        write!(f, "earliest_known_activity:")?;
        write_date(f, self.earliest_known_activity)?;
        write!(f, ", latest_known_activity:")?;
        write_date(f, self.latest_known_activity)?;
        write!(f, ", email_address:{:?}, occupations:[", self.email_address)?;
        write_list(f, &self.occupations)?;
        write!(f, "], memberships:[")?;
        write_list(f, &self.memberships)?;
        write!(f, "]}}")
    }
}

fn write_date(f: &mut fmt::Formatter<'_>, date: Option<NaiveDate>) -> fmt::Result {
    match date {
        Some(date) => write!(f, "{}", date.format("%Y-%m-%d")),
        None => write!(f, "none"),
    }
}

fn write_list<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}
