//! AWS Signature Version 2 for query-protocol requests.

use std::collections::BTreeMap;

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use hmac::{Hmac, Mac};
use sha1::Sha1;
use sha2::Sha256;

use crate::config::SignatureMethod;
use crate::credential::Credential;
use crate::error::{IamError, Result};

type HmacSha1 = Hmac<Sha1>;
type HmacSha256 = Hmac<Sha256>;

/// Query parameters of a single request, kept sorted by key.
pub type QueryParams = BTreeMap<String, String>;

/// Percent-encodes a string per RFC 3986.
///
/// Unreserved characters (A-Z, a-z, 0-9, '-', '.', '_', '~') are NOT encoded.
/// All other characters are encoded as `%XX` (uppercase hex).
/// Spaces become `%20` (NOT `+`).
pub(crate) fn percent_encode(s: &str) -> String {
    let mut encoded = String::with_capacity(s.len() * 2);
    for byte in s.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                encoded.push(byte as char);
            }
            _ => {
                encoded.push_str(&format!("%{:02X}", byte));
            }
        }
    }
    encoded
}

/// Joins the parameters as `key1=val1&key2=val2&...` in byte-wise key order.
pub(crate) fn canonical_query(params: &QueryParams) -> String {
    params
        .iter()
        .map(|(k, v)| format!("{}={}", percent_encode(k), percent_encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Signs `params` in place.
///
/// Steps:
/// 1. Insert `AWSAccessKeyId`, `SignatureVersion` and `SignatureMethod`, drop any stale `Signature`.
/// 2. Sort params by key (BTreeMap provides this).
/// 3. Build StringToSign: `{method}\n{host}\n{path}\n{canonical_query}`.
/// 4. HMAC-SHA1 or HMAC-SHA256 with the secret access key.
/// 5. Base64 encode the HMAC result and store it as `Signature`.
pub fn sign(
    credential: &Credential,
    http_method: &str,
    path: &str,
    params: &mut QueryParams,
    host: &str,
    method: SignatureMethod,
) -> Result<()> {
    // Step 1
    params.remove("Signature");
    params.insert(
        "AWSAccessKeyId".to_string(),
        credential.access_key_id.clone(),
    );
    params.insert(
        "SignatureVersion".to_string(),
        method.as_version_str().to_string(),
    );
    params.insert(
        "SignatureMethod".to_string(),
        method.as_method_str().to_string(),
    );

    // Step 2-3
    let string_to_sign = format!(
        "{}\n{}\n{}\n{}",
        http_method,
        host,
        path,
        canonical_query(params)
    );

    // Step 4
    let key = credential.secret_access_key.as_bytes();
    let digest = match method {
        SignatureMethod::HmacSha1 => {
            let mut mac = HmacSha1::new_from_slice(key)
                .map_err(|e| IamError::Signature(format!("HMAC key error: {}", e)))?;
            mac.update(string_to_sign.as_bytes());
            mac.finalize().into_bytes().to_vec()
        }
        SignatureMethod::HmacSha256 => {
            let mut mac = HmacSha256::new_from_slice(key)
                .map_err(|e| IamError::Signature(format!("HMAC key error: {}", e)))?;
            mac.update(string_to_sign.as_bytes());
            mac.finalize().into_bytes().to_vec()
        }
    };

    // Step 5
    params.insert("Signature".to_string(), BASE64.encode(digest));
    Ok(())
}
