use std::fmt;

use serde::{Deserialize, Serialize};

/// One entry of a person's employment history.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Occupation {
    pub company: String,
    pub job_title: String,
}

impl fmt::Display for Occupation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Occupation{{company:{:?}, job_title:{:?}}}",
            self.company, self.job_title
        )
    }
}
