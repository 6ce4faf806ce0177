//! Request building and signing logic for the IAM query API.

use std::sync::OnceLock;

use chrono::{SecondsFormat, Utc};
use regex::Regex;
use reqwest::Url;

use crate::config::ClientConfig;
use crate::credential::Credential;
use crate::error::{IamError, Result};
use crate::sign::{QueryParams, canonical_query, sign};

/// Cached regex for user name validation: 1-64 of `[A-Za-z0-9_+=,.@-]`.
static USER_NAME_REGEX: OnceLock<Regex> = OnceLock::new();

/// Cached regex for IAM paths: `/` or `/.../` of printable ASCII.
static PATH_REGEX: OnceLock<Regex> = OnceLock::new();

/// Cached regex for access key ids: 16-128 of `[A-Za-z0-9_]`.
static ACCESS_KEY_ID_REGEX: OnceLock<Regex> = OnceLock::new();

fn user_name_regex() -> &'static Regex {
    USER_NAME_REGEX.get_or_init(|| {
        Regex::new(r"^[A-Za-z0-9_+=,.@-]{1,64}$").expect("Invalid USER_NAME_REGEX pattern")
    })
}

fn path_regex() -> &'static Regex {
    PATH_REGEX.get_or_init(|| {
        Regex::new(r"^(/|/[\x21-\x7E]{1,510}/)$").expect("Invalid PATH_REGEX pattern")
    })
}

fn access_key_id_regex() -> &'static Regex {
    ACCESS_KEY_ID_REGEX.get_or_init(|| {
        Regex::new(r"^[A-Za-z0-9_]{16,128}$").expect("Invalid ACCESS_KEY_ID_REGEX pattern")
    })
}

fn validate_user_name(name: &str) -> Result<()> {
    if !user_name_regex().is_match(name) {
        return Err(IamError::Validation(format!(
            "Invalid UserName '{}'. Expected 1-64 characters from [A-Za-z0-9_+=,.@-]",
            name
        )));
    }
    Ok(())
}

fn validate_path(path: &str) -> Result<()> {
    if !path_regex().is_match(path) {
        return Err(IamError::Validation(format!(
            "Invalid Path '{}'. Expected '/' or a value that begins and ends with '/'",
            path
        )));
    }
    Ok(())
}

fn validate_access_key_id(id: &str) -> Result<()> {
    if !access_key_id_regex().is_match(id) {
        return Err(IamError::Validation(format!(
            "Invalid AccessKeyId '{}'. Expected 16-128 word characters",
            id
        )));
    }
    Ok(())
}

fn action(name: &str) -> QueryParams {
    let mut params = QueryParams::new();
    params.insert("Action".to_string(), name.to_string());
    params
}

pub(crate) fn create_user(name: &str, path: &str) -> Result<QueryParams> {
    validate_user_name(name)?;
    validate_path(path)?;
    let mut params = action("CreateUser");
    params.insert("UserName".to_string(), name.to_string());
    params.insert("Path".to_string(), path.to_string());
    Ok(params)
}

pub(crate) fn get_user(name: Option<&str>) -> Result<QueryParams> {
    let mut params = action("GetUser");
    if let Some(name) = name {
        validate_user_name(name)?;
        params.insert("UserName".to_string(), name.to_string());
    }
    Ok(params)
}

pub(crate) fn delete_user(name: &str) -> Result<QueryParams> {
    validate_user_name(name)?;
    let mut params = action("DeleteUser");
    params.insert("UserName".to_string(), name.to_string());
    Ok(params)
}

pub(crate) fn create_access_key(user_name: &str) -> Result<QueryParams> {
    validate_user_name(user_name)?;
    let mut params = action("CreateAccessKey");
    params.insert("UserName".to_string(), user_name.to_string());
    Ok(params)
}

pub(crate) fn delete_access_key(access_key_id: &str, user_name: &str) -> Result<QueryParams> {
    validate_access_key_id(access_key_id)?;
    validate_user_name(user_name)?;
    let mut params = action("DeleteAccessKey");
    params.insert("AccessKeyId".to_string(), access_key_id.to_string());
    params.insert("UserName".to_string(), user_name.to_string());
    Ok(params)
}

/// Gets current UTC time in RFC 3339 format with second precision.
fn get_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Parses the configured endpoint and normalizes its path to `/`.
pub(crate) fn parse_endpoint(endpoint: &str) -> Result<Url> {
    let mut url = Url::parse(endpoint)
        .map_err(|e| IamError::Config(format!("invalid endpoint '{}': {}", endpoint, e)))?;
    if url.host_str().is_none() {
        return Err(IamError::Config(format!(
            "endpoint '{}' has no host",
            endpoint
        )));
    }
    url.set_path("/");
    url.set_query(None);
    Ok(url)
}

/// Host as it appears in the signed string: host plus any non-default port.
pub(crate) fn signing_host(url: &Url) -> String {
    let host = url.host_str().unwrap_or_default();
    match url.port() {
        Some(port) => format!("{}:{}", host, port),
        None => host.to_string(),
    }
}

/// Builds the signed GET URL for one action.
///
/// Adds `Version` and `Timestamp`, signs the complete parameter set and
/// encodes it, unchanged, as the query string.
pub(crate) fn build_signed_url(
    mut params: QueryParams,
    credential: &Credential,
    config: &ClientConfig,
    endpoint: &Url,
) -> Result<Url> {
    params.insert("Version".to_string(), config.api_version.to_string());
    params.insert("Timestamp".to_string(), get_timestamp());

    sign(
        credential,
        "GET",
        endpoint.path(),
        &mut params,
        &signing_host(endpoint),
        config.signature_method,
    )?;

    let mut url = endpoint.clone();
    url.set_query(Some(&canonical_query(&params)));
    Ok(url)
}
