//! Endpoint paths for the person and graph services.

use url::Url;

use crate::Error;

/// Site token of the vendor's own identifier namespace.
pub const RAPLEAF_SITE: &str = "rapleaf";

/// Public profile URL prefix per site token.
const PROFILE_URL_PREFIXES: &[(&str, &str)] = &[
    ("bebo", "http://www.bebo.com/"),
    ("facebook", "http://www.facebook.com/"),
    ("flickr", "http://www.flickr.com/"),
    ("friendster", "http://profiles.friendster.com/"),
    ("hi5", "http://www.hi5.com/friend/"),
    ("linkedin", "http://www.linkedin.com/in/"),
    ("myspace", "http://profile.myspace.com/"),
    ("plaxo", "http://www.plaxo.com/"),
    (RAPLEAF_SITE, "http://api.rapleaf.com/v3/person/web/rapleaf/"),
    ("twitter", "http://www.twitter.com/"),
];

/// The three ways of addressing a person.
#[derive(Clone, Copy, Debug)]
pub enum Lookup<'a> {
    /// `v3/person/email/{email}`
    Email(&'a str),
    /// `v3/person/web/{site}/{profile_id}`
    Site { site: &'a str, profile_id: &'a str },
    /// `v3/person/web/rapleaf/{id}`
    RapleafId(&'a str),
}

impl Lookup<'_> {
    /// Appends this lookup's path to the base URL, returning the full URL.
    ///
    /// Caller-supplied segments are percent-encoded, so `/`, `?`, `#`, `%`
    /// and whitespace inside an identifier never change the URL structure.
    /// A segment of exactly `.` or `..` has no encoding that survives URL
    /// normalization and is rejected with [`Error::DotSegment`].
    pub fn add_to_url(&self, base: &Url) -> Result<Url, Error> {
        match *self {
            Lookup::Email(email) => with_segments(base, &["v3", "person", "email", email]),
            Lookup::Site { site, profile_id } => {
                with_segments(base, &["v3", "person", "web", site, profile_id])
            }
            Lookup::RapleafId(id) => {
                with_segments(base, &["v3", "person", "web", RAPLEAF_SITE, id])
            }
        }
    }
}

/// Which list the graph service should return for an identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GraphOutput {
    /// Newline-separated vendor ids.
    RapleafIds = 1,
    /// Comma-separated email addresses.
    Emails = 2,
}

impl GraphOutput {
    pub(crate) fn separator(self) -> char {
        match self {
            GraphOutput::RapleafIds => '\n',
            GraphOutput::Emails => ',',
        }
    }

    /// `v2/graph/{identifier}?{1|2}`
    pub fn add_to_url(self, base: &Url, identifier: &str) -> Result<Url, Error> {
        let mut url = with_segments(base, &["v2", "graph", identifier])?;
        url.set_query(Some(&(self as u8).to_string()));
        Ok(url)
    }
}

/// Public profile page of `profile_id` on a known site, e.g.
/// `linkedin` + `johnqpublic` → `http://www.linkedin.com/in/johnqpublic`.
///
/// `None` for site tokens without a known profile page.
pub fn profile_url(site: &str, profile_id: &str) -> Option<Url> {
    let (_, prefix) = PROFILE_URL_PREFIXES
        .iter()
        .find(|(token, _)| *token == site)?;
    let base = Url::parse(prefix).ok()?;
    with_segments(&base, &[profile_id]).ok()
}

fn with_segments(base: &Url, segments: &[&str]) -> Result<Url, Error> {
    // the URL parser resolves `.`/`..` (and `%2e` spellings) away
    if let Some(dots) = segments.iter().find(|s| matches!(**s, "." | "..")) {
        return Err(Error::DotSegment(dots.to_string()));
    }
    let mut url = base.clone();
    // http URLs always have a hierarchical path
    if let Ok(mut path) = url.path_segments_mut() {
        path.pop_if_empty().extend(segments);
    }
    Ok(url)
}
