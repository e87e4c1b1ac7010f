//! Request signing for the Kodo object storage service.
//!
//! Every token is built from `URL_SAFE_BASE64(HMAC-SHA1(secret_key, data))`:
//!
//! ```text
//! management:  Authorization: QBox <access_key>:<sign(path[?query] + "\n")>
//! upload:      <access_key>:<sign(policy)>:<policy>
//! download:    <url>?e=<deadline>&token=<access_key>:<sign(url?e=<deadline>)>
//! ```

use crate::core_storage::StorageError;
use base64::engine::general_purpose::URL_SAFE;
use base64::Engine;
use hmac::{Hmac, Mac};
use serde::Serialize;
use sha1::Sha1;
use url::Url;

type HmacSha1 = Hmac<Sha1>;

#[derive(Debug, Serialize)]
struct PutPolicy {
    scope: String,
    deadline: i64,
}

/// Signs `data` with the secret key.
pub fn sign(secret_key: &str, data: &[u8]) -> String {
    let mut mac =
        HmacSha1::new_from_slice(secret_key.as_bytes()).expect("HMAC can accept any key length");
    mac.update(data);
    URL_SAFE.encode(mac.finalize().into_bytes())
}

/// Addresses `key` of `bucket` in management request paths.
pub fn encoded_entry(bucket: &str, key: &str) -> String {
    URL_SAFE.encode(format!("{}:{}", bucket, key))
}

/// Builds the `Authorization` header value for a management request without body.
pub fn access_token(access_key: &str, secret_key: &str, url: &Url) -> String {
    let mut data = url.path().to_string();
    if let Some(query) = url.query() {
        data.push('?');
        data.push_str(query);
    }
    data.push('\n');
    format!("QBox {}:{}", access_key, sign(secret_key, data.as_bytes()))
}

/// Builds an upload token allowing exactly one write of `key` until `deadline`.
pub fn upload_token(
    access_key: &str,
    secret_key: &str,
    bucket: &str,
    key: &str,
    deadline: i64,
) -> Result<String, StorageError> {
    let policy = PutPolicy {
        scope: format!("{}:{}", bucket, key),
        deadline,
    };
    let encoded = URL_SAFE.encode(serde_json::to_vec(&policy)?);
    Ok(format!(
        "{}:{}:{}",
        access_key,
        sign(secret_key, encoded.as_bytes()),
        encoded
    ))
}

/// Turns a public object URL into a private one, valid until `deadline`.
pub fn private_url(access_key: &str, secret_key: &str, mut url: Url, deadline: i64) -> Url {
    url.query_pairs_mut().append_pair("e", &deadline.to_string());
    let token = format!("{}:{}", access_key, sign(secret_key, url.as_str().as_bytes()));
    url.query_pairs_mut().append_pair("token", &token);
    url
}
