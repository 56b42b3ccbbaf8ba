//! Outcome taxonomy for a single request against the person endpoint.

use std::fmt;

/// HTTP status of a lookup, including the two synthetic outcomes the client
/// produces itself when no vendor response is available.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Status {
    /// 200: the body is a person XML document.
    Ok,
    /// 202: the person is being searched; retry later.
    Accepted,
    /// 400: the identifier is malformed.
    BadRequest,
    /// 401: the API key is missing or invalid.
    Unauthorized,
    /// 403: the query quota is exhausted.
    Forbidden,
    /// 404: the vendor does not know this person.
    NotFound,
    /// 500: vendor-side failure.
    InternalServerError,
    /// Synthetic 503: no connection could be established.
    Unavailable,
    /// Synthetic 204: connected, but no response came back.
    NoContent,
    /// Any other code the vendor may return.
    Other(u16),
}

impl Status {
    /// Numeric HTTP code. Synthetic outcomes report 503 and 204.
    pub fn code(self) -> u16 {
        match self {
            Status::Ok => 200,
            Status::Accepted => 202,
            Status::BadRequest => 400,
            Status::Unauthorized => 401,
            Status::Forbidden => 403,
            Status::NotFound => 404,
            Status::InternalServerError => 500,
            Status::Unavailable => 503,
            Status::NoContent => 204,
            Status::Other(code) => code,
        }
    }

    /// Maps a code received from the vendor.
    ///
    /// 503 and 204 are never sent by the vendor for this endpoint, so they
    /// map onto the synthetic variants as well.
    pub fn from_code(code: u16) -> Self {
        match code {
            200 => Status::Ok,
            202 => Status::Accepted,
            400 => Status::BadRequest,
            401 => Status::Unauthorized,
            403 => Status::Forbidden,
            404 => Status::NotFound,
            500 => Status::InternalServerError,
            503 => Status::Unavailable,
            204 => Status::NoContent,
            other => Status::Other(other),
        }
    }

    /// True for the outcomes invented by the client rather than the vendor.
    pub fn is_synthetic(self) -> bool {
        matches!(self, Status::Unavailable | Status::NoContent)
    }

    /// The vendor's documented meaning of this outcome.
    pub fn message(self) -> &'static str {
        match self {
            Status::Ok => "Request processed successfully.",
            Status::Accepted => {
                "This person is currently being searched. Check back shortly and we should have data."
            }
            Status::BadRequest => "Invalid email address or Rapleaf ID.",
            Status::Unauthorized => "API key was not provided or is invalid.",
            Status::Forbidden => {
                "Your query limit has been exceeded. Contact developer@rapleaf.com if you would like to increase your limit."
            }
            Status::NotFound => {
                "Returned for lookup by hash or site userid. We do not have this person in our system. If you would like better results, consider supplying the email address."
            }
            Status::InternalServerError => {
                "There was an unexpected error on our server. This should be very rare and if you see it please contact developer@rapleaf.com."
            }
            Status::Unavailable => "Could not connect to the service.",
            Status::NoContent => "The service closed the connection without responding.",
            Status::Other(_) => "Unknown error code.",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.code(), self.message())
    }
}
