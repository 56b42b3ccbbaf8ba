//! The vendor's XML person document, mirrored element for element.
//!
//! Every leaf is kept as the raw string found in the document; coercion to
//! numbers and dates happens in the normalization pass.

use quick_xml::events::Event;
use quick_xml::Reader;
use serde::Deserialize;

use crate::Error;

/// `<person id="...">`
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
pub struct WirePerson {
    #[serde(rename = "@id", default)]
    pub id: String,

    #[serde(default)]
    pub basics: WireBasics,

    #[serde(default)]
    pub memberships: WireMemberships,
}

/// `<basics>`: scalar facts plus the occupation groups.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
pub struct WireBasics {
    pub name: Option<String>,
    pub gender: Option<String>,
    pub location: Option<String>,
    pub num_friends: Option<String>,
    pub age: Option<String>,
    pub earliest_known_activity: Option<String>,
    pub latest_known_activity: Option<String>,

    /// Every `<occupations>` element, in document order.
    #[serde(default)]
    pub occupations: Vec<WireOccupations>,
}

/// `<occupations>`
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
pub struct WireOccupations {
    #[serde(rename = "occupation", default)]
    pub entries: Vec<WireOccupation>,
}

/// `<occupation company="..." job_title="..."/>`
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
pub struct WireOccupation {
    #[serde(rename = "@company")]
    pub company: Option<String>,
    #[serde(rename = "@job_title")]
    pub job_title: Option<String>,
}

/// `<memberships>`
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
pub struct WireMemberships {
    #[serde(default)]
    pub primary: WireMembershipGroup,
    #[serde(default)]
    pub supplemental: WireMembershipGroup,
}

/// `<primary>` or `<supplemental>`
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
pub struct WireMembershipGroup {
    #[serde(rename = "membership", default)]
    pub entries: Vec<WireMembership>,
}

/// `<membership site="..." exists="..." .../>`
///
/// A membership that does not exist usually carries only `site` and `exists`.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
pub struct WireMembership {
    #[serde(rename = "@site")]
    pub site: Option<String>,
    #[serde(rename = "@exists")]
    pub exists: Option<String>,
    #[serde(rename = "@profile_url")]
    pub profile_url: Option<String>,
    #[serde(rename = "@image_url")]
    pub image_url: Option<String>,
    #[serde(rename = "@num_friends")]
    pub num_friends: Option<String>,
    #[serde(rename = "@num_followers")]
    pub num_followers: Option<String>,
    #[serde(rename = "@num_followed")]
    pub num_followed: Option<String>,
}

impl WirePerson {
    /// Decodes a person document.
    ///
    /// An empty body means there is nothing to decode and yields `Ok(None)`;
    /// anything else must be well-formed XML rooted at `<person>`.
    pub fn from_xml(xml: &str) -> Result<Option<WirePerson>, Error> {
        if xml.is_empty() {
            return Ok(None);
        }
        if let Some(root) = root_element(xml) {
            if root != "person" {
                return Err(Error::UnexpectedRoot(root));
            }
        }
        let person = quick_xml::de::from_str::<WirePerson>(xml)?;
        Ok(Some(person))
    }
}

/// Name of the first element, or `None` if the reader fails before one.
///
/// The serde decoder ignores the root name, so it is checked here.
fn root_element(xml: &str) -> Option<String> {
    let mut reader = Reader::from_str(xml);
    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) | Ok(Event::Empty(e)) => {
                return Some(String::from_utf8_lossy(e.name().as_ref()).to_string());
            }
            Ok(Event::Eof) | Err(_) => return None,
            _ => {}
        }
    }
}
