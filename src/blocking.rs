//! Synchronous (blocking) client for the AWS IAM API.
//!
//! This module is only available when the `blocking` feature is enabled.
//! It mirrors the async [`crate::client::Client`] API using `reqwest::blocking`.
//!
//! # Example
//!
//! ```no_run
//! use rs_aws_iam::blocking::Client;
//! use rs_aws_iam::{Credential, Region};
//!
//! fn main() -> rs_aws_iam::Result<()> {
//!     let client = Client::new(Credential::new("id", "secret"), Region::us_east_1())?;
//!
//!     let resp = client.create_user("bob", "/")?;
//!     println!("UserId: {}", resp.user.id);
//!     Ok(())
//! }
//! ```

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

/// Synchronous client for the AWS IAM API.
pub struct Client {
    http: reqwest::blocking::Client,
    config: ClientConfig,
    credential: Credential,
    endpoint: Url,
}

impl Client {
    /// Creates a new blocking client for a region.
    pub fn new(credential: Credential, region: Region) -> Result<Self> {
        Self::with_config(credential, ClientConfig::new(region))
    }

    /// Creates a new blocking client with custom configuration.
    pub fn with_config(credential: Credential, config: ClientConfig) -> Result<Self> {
        let endpoint = parse_endpoint(&config.region.iam_endpoint)?;

        // reqwest's blocking client defaults to a 30s timeout; `None` disables it.
        let http = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
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
    pub fn create_user(&self, name: &str, path: &str) -> Result<CreateUserResponse> {
        self.query(request::create_user(name, path)?)
    }

    /// Retrieves a user, or the calling identity when `name` is `None`.
    pub fn get_user(&self, name: Option<&str>) -> Result<GetUserResponse> {
        self.query(request::get_user(name)?)
    }

    /// Deletes a user.
    pub fn delete_user(&self, name: &str) -> Result<SimpleResponse> {
        self.query(request::delete_user(name)?)
    }

    /// Creates a new access key for a user. The secret is only returned here.
    pub fn create_access_key(&self, user_name: &str) -> Result<CreateAccessKeyResponse> {
        self.query(request::create_access_key(user_name)?)
    }

    /// Deletes an access key belonging to a user.
    pub fn delete_access_key(&self, access_key_id: &str, user_name: &str) -> Result<SimpleResponse> {
        self.query(request::delete_access_key(access_key_id, user_name)?)
    }

    fn query<T: FromXml>(&self, params: QueryParams) -> Result<T> {
        tracing::debug!(
            action = params.get("Action").map(String::as_str).unwrap_or_default(),
            host = self.endpoint.host_str().unwrap_or_default(),
            "sending IAM request"
        );
        let url = build_signed_url(params, &self.credential, &self.config, &self.endpoint)?;
        let response = transport::get_blocking(&self.http, url)?;
        handle_response(response)
    }
}
