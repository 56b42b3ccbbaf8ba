use std::fmt;

use serde::{Deserialize, Serialize};

/// Presence of a person on one external site.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct MembershipSite {
    /// Domain of the external site, e.g. `facebook.com`.
    pub site: String,

    /// Vendor token such as `true`, `false`, `unknown` or `tbd`.
    ///
    /// Kept as a string: the vendor adds values without notice.
    pub exists: String,

    pub profile_url: String,

    pub image_url: String,

    pub num_friends: i64,

    pub num_followers: i64,

    pub num_followed: i64,
}

impl fmt::Display for MembershipSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "MembershipSite{{site:{:?}, exists:{:?}, profile_url:{:?}, image_url:{:?}, \
             num_friends:{}, num_followers:{}, num_followed:{}}}",
            self.site,
            self.exists,
            self.profile_url,
            self.image_url,
            self.num_friends,
            self.num_followers,
            self.num_followed
        )
    }
}
