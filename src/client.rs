use reqwest::Url;

use crate::config::{ClientConfig, Region};
use crate::credential::Credential;
use crate::error::{IamError, Result};
use crate::exec::handle_response;
use crate::request::{self, build_signed_url, parse_endpoint};
use crate::response::{CreateAccessKeyResponse, CreateUserResponse, GetUserResponse, SimpleResponse};
use crate::sign::QueryParams;
use crate::transport;
use crate::xml::FromXml;

/// Async client for the AWS IAM API.
///
/// Nothing is mutated after construction, so one client can be shared
/// across tasks.
pub struct Client {
    http: reqwest::Client,
    config: ClientConfig,
    credential: Credential,
    endpoint: Url,
}

impl Client {
    /// Creates a new client for a region.
    pub fn new(credential: Credential, region: Region) -> Result<Self> {
        Self::with_config(credential, ClientConfig::new(region))
    }

    /// Creates a new client with an explicit credential and custom configuration.
    pub fn with_config(credential: Credential, config: ClientConfig) -> Result<Self> {
        let endpoint = parse_endpoint(&config.region.iam_endpoint)?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| IamError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            config,
            credential,
            endpoint,
        })
    }

    /// Returns the configuration this client was built with.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Creates a new IAM user under `path` (use `/` for the root).
    pub async fn create_user(&self, name: &str, path: &str) -> Result<CreateUserResponse> {
        self.query(request::create_user(name, path)?).await
    }

    /// Retrieves a user, or the calling identity when `name` is `None`.
    pub async fn get_user(&self, name: Option<&str>) -> Result<GetUserResponse> {
        self.query(request::get_user(name)?).await
    }

    /// Deletes a user.
    pub async fn delete_user(&self, name: &str) -> Result<SimpleResponse> {
        self.query(request::delete_user(name)?).await
    }

    /// Creates a new access key for a user. The secret is only returned here.
    pub async fn create_access_key(&self, user_name: &str) -> Result<CreateAccessKeyResponse> {
        self.query(request::create_access_key(user_name)?).await
    }

    /// Deletes an access key belonging to a user.
    pub async fn delete_access_key(
        &self,
        access_key_id: &str,
        user_name: &str,
    ) -> Result<SimpleResponse> {
        self.query(request::delete_access_key(access_key_id, user_name)?)
            .await
    }

    async fn query<T: FromXml>(&self, params: QueryParams) -> Result<T> {
        tracing::debug!(
            action = params.get("Action").map(String::as_str).unwrap_or_default(),
            host = self.endpoint.host_str().unwrap_or_default(),
            "sending IAM request"
        );
        let url = build_signed_url(params, &self.credential, &self.config, &self.endpoint)?;
        let response = transport::get(&self.http, url).await?;
        handle_response(response)
    }
}
