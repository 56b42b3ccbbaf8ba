//! Error types for the API client.

/// Errors that can occur while configuring the client, addressing a person,
/// or decoding a person document.
///
/// Transport failures and HTTP statuses are not errors: they come back as a
/// [`RawResponse`](crate::RawResponse) carrying a [`Status`](crate::Status).
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The configured host and port do not form a valid `http://` base URL.
    #[error("Invalid host or port: {0}")]
    InvalidHost(String),
    /// The underlying HTTP client could not be constructed.
    #[error("Failed to build HTTP client")]
    ClientBuild(#[from] reqwest::Error),
    /// An identifier of exactly `.` or `..` cannot be sent as a path segment.
    #[error("Identifier {0:?} cannot be used as a URL path segment")]
    DotSegment(String),
    /// The body is well-formed XML but its root element is not `<person>`.
    #[error("Expected a <person> document, found <{0}>")]
    UnexpectedRoot(String),
    /// The response body is not well-formed XML.
    #[error("Failed to parse person XML: {0}")]
    Parse(#[from] quick_xml::DeError),
}
