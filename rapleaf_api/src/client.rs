//! Lookup client for the Rapleaf person API.

use crate::{
    endpoint::{GraphOutput, Lookup},
    retrieve::{truncate_body, RawResponse, Retriever},
    types::Person,
    ClientConfig, Error, Status,
};

/// Lookup client for the Rapleaf person API.
///
/// Holds the API key and an immutable [`ClientConfig`]; cheap to clone and
/// safe to share between tasks. Every call performs exactly one GET on a
/// fresh connection: nothing is cached, retried or rate limited.
#[derive(Clone, Debug)]
pub struct Client {
    api_key: String,
    config: ClientConfig,
    retriever: Retriever,
}

impl Client {
    /// Creates a client pointing at the production API.
    pub fn new(api_key: &str) -> Result<Self, Error> {
        Self::with_config(api_key, ClientConfig::default())
    }

    /// Creates a client with a custom target. Used for testing with wiremock.
    pub fn with_config(api_key: &str, config: ClientConfig) -> Result<Self, Error> {
        Ok(Self {
            api_key: api_key.to_string(),
            retriever: Retriever::new(config.timeout())?,
            config,
        })
    }

    /// The target this client was built with.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    async fn person_xml(&self, lookup: Lookup<'_>) -> RawResponse {
        match lookup.add_to_url(self.config.base_url()) {
            Ok(url) => self.retriever.retrieve(&self.api_key, url).await,
            Err(e) => RawResponse::rejected(&e),
        }
    }

    /// Raw response for a lookup by email address.
    pub async fn person_xml_by_email(&self, email: &str) -> RawResponse {
        self.person_xml(Lookup::Email(email)).await
    }

    /// Raw response for a lookup by site token and profile id.
    pub async fn person_xml_by_site(&self, site: &str, profile_id: &str) -> RawResponse {
        self.person_xml(Lookup::Site { site, profile_id }).await
    }

    /// Raw response for a lookup by vendor id.
    pub async fn person_xml_by_rapleaf_id(&self, rapleaf_id: &str) -> RawResponse {
        self.person_xml(Lookup::RapleafId(rapleaf_id)).await
    }

    /// Looks a person up by email address.
    ///
    /// Returns `None` unless the vendor answered 200. The returned person has
    /// [`Person::email_address`] set to `email`.
    pub async fn person_by_email(&self, email: &str) -> Option<Person> {
        let resp = self.person_xml_by_email(email).await;
        accept_email_response(resp, email)
    }

    /// Looks a person up by their profile id on an external site.
    ///
    /// Returns `None` unless the vendor answered 200 with a well-formed
    /// document.
    pub async fn person_by_site(&self, site: &str, profile_id: &str) -> Option<Person> {
        let resp = self.person_xml_by_site(site, profile_id).await;
        accept_site_response(resp)
    }

    /// Looks a person up by vendor id. Same contract as [`Self::person_by_site`].
    pub async fn person_by_rapleaf_id(&self, rapleaf_id: &str) -> Option<Person> {
        let resp = self.person_xml_by_rapleaf_id(rapleaf_id).await;
        accept_site_response(resp)
    }

    /// Raw response of the graph service for an email address or vendor id.
    pub async fn graph_raw(&self, identifier: &str, output: GraphOutput) -> RawResponse {
        match output.add_to_url(self.config.base_url(), identifier) {
            Ok(url) => self.retriever.retrieve(&self.api_key, url).await,
            Err(e) => RawResponse::rejected(&e),
        }
    }

    /// Identifiers connected to `identifier`, or `None` unless the vendor
    /// answered 200.
    pub async fn graph(&self, identifier: &str, output: GraphOutput) -> Option<Vec<String>> {
        let resp = self.graph_raw(identifier, output).await;
        if resp.status != Status::Ok {
            return None;
        }
        Some(split_graph_body(&resp.body, output))
    }
}

/// Email contract: status 200 is the only gate. Whatever the body decodes
/// to is handed back; a body that fails to decode is logged and yields
/// nothing, as no partial tree survives a decode error.
fn accept_email_response(resp: RawResponse, email: &str) -> Option<Person> {
    if resp.status != Status::Ok {
        return None;
    }
    match Person::from_xml(&resp.body) {
        Ok(person) => person.map(|person| Person {
            email_address: email.to_string(),
            ..person
        }),
        Err(e) => {
            tracing::warn!(
                "Failed to parse person for email lookup: {} | body: {}",
                e,
                truncate_body(&resp.body)
            );
            None
        }
    }
}

/// Site contract: status 200 and a successful decode are both required.
fn accept_site_response(resp: RawResponse) -> Option<Person> {
    if resp.status != Status::Ok {
        return None;
    }
    match Person::from_xml(&resp.body) {
        Ok(person) => person,
        Err(e) => {
            tracing::debug!("Discarding unparseable person: {}", e);
            None
        }
    }
}

fn split_graph_body(body: &str, output: GraphOutput) -> Vec<String> {
    body.split(output.separator())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
