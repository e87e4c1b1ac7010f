use crate::config::StorageConfig;
use crate::core_storage::auth;
use crate::core_storage::{DirectoryEntry, StorageBackend, StorageError};
use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use log::{debug, warn};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use url::Url;

/// Status code the service uses for a missing object.
const KODO_NO_SUCH_ENTRY: u16 = 612;

#[derive(Debug, Deserialize)]
struct StatResponse {
    fsize: u64,
    #[serde(rename = "putTime")]
    put_time: i64,
}

#[derive(Debug, Deserialize)]
struct ListItem {
    key: String,
    fsize: u64,
    #[serde(rename = "putTime")]
    put_time: i64,
}

#[derive(Debug, Deserialize)]
struct ListResponse {
    #[serde(default)]
    items: Vec<ListItem>,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: String,
}

/// Storage backend talking to a Kodo bucket over HTTPS.
#[derive(Debug, Clone)]
pub struct KodoBackend {
    client: reqwest::Client,
    config: StorageConfig,
}

impl KodoBackend {
    pub fn new(config: StorageConfig, client: reqwest::Client) -> Self {
        Self { client, config }
    }

    fn deadline(&self) -> i64 {
        expiry_deadline(Utc::now().timestamp(), self.config.url_expiry_secs)
    }

    fn entry(&self, key: &str) -> String {
        auth::encoded_entry(&self.config.bucket, key)
    }

    /// Issues a signed management request and returns the response body.
    async fn management_call(&self, url: Url, key: &str) -> Result<Vec<u8>, StorageError> {
        let token = auth::access_token(&self.config.access_key, &self.config.secret_key, &url);
        debug!("Kodo management call: {}", url.path());

        let response = self
            .client
            .post(url)
            .header(AUTHORIZATION, token)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.bytes().await?.to_vec();
        if (200..300).contains(&status) {
            Ok(body)
        } else {
            Err(service_error(status, &body, key))
        }
    }
}

#[async_trait]
impl StorageBackend for KodoBackend {
    async fn list(&self, limit: usize) -> Result<Vec<DirectoryEntry>, StorageError> {
        let mut url = Url::parse(&self.config.rsf_host)?.join("list")?;
        url.query_pairs_mut()
            .append_pair("bucket", &self.config.bucket)
            .append_pair("limit", &limit.to_string());

        let body = self.management_call(url, "").await?;
        let listing: ListResponse = serde_json::from_slice(&body)?;

        Ok(listing
            .items
            .into_iter()
            .take(limit)
            .map(|item| DirectoryEntry {
                name: item.key,
                size: item.fsize,
                modified: from_put_time(item.put_time),
            })
            .collect())
    }

    async fn stat(&self, key: &str) -> Result<DirectoryEntry, StorageError> {
        let url = Url::parse(&self.config.rs_host)?.join(&format!("stat/{}", self.entry(key)))?;
        let body = self.management_call(url, key).await?;
        let stat: StatResponse = serde_json::from_slice(&body)?;

        Ok(DirectoryEntry {
            name: key.to_string(),
            size: stat.fsize,
            modified: from_put_time(stat.put_time),
        })
    }

    async fn put(&self, key: &str, data: Vec<u8>) -> Result<(), StorageError> {
        let token = auth::upload_token(
            &self.config.access_key,
            &self.config.secret_key,
            &self.config.bucket,
            key,
            self.deadline(),
        )?;
        let length = data.len();
        let form = Form::new()
            .text("token", token)
            .text("key", key.to_string())
            .part("file", Part::bytes(data).file_name(key.to_string()));

        let response = self
            .client
            .post(Url::parse(&self.config.up_host)?)
            .multipart(form)
            .send()
            .await?;

        let status = response.status().as_u16();
        if (200..300).contains(&status) {
            debug!("Uploaded {} ({} bytes)", key, length);
            Ok(())
        } else {
            let body = response.bytes().await?;
            Err(service_error(status, &body, key))
        }
    }

    async fn delete(&self, key: &str) -> Result<(), StorageError> {
        let url =
            Url::parse(&self.config.rs_host)?.join(&format!("delete/{}", self.entry(key)))?;
        self.management_call(url, key).await?;
        Ok(())
    }

    async fn rename(&self, from: &str, to: &str) -> Result<(), StorageError> {
        let path = format!("move/{}/{}", self.entry(from), self.entry(to));
        let url = Url::parse(&self.config.rs_host)?.join(&path)?;
        self.management_call(url, from).await?;
        Ok(())
    }

    fn fetch_url(&self, key: &str) -> Result<Url, StorageError> {
        let base = public_url(&self.config.domain, key)?;
        Ok(auth::private_url(
            &self.config.access_key,
            &self.config.secret_key,
            base,
            self.deadline(),
        ))
    }
}

/// Builds `http://<domain>/<key>`, keeping any scheme the domain already carries.
fn public_url(domain: &str, key: &str) -> Result<Url, StorageError> {
    let domain = domain.trim_end_matches('/');
    let mut url = if domain.contains("://") {
        Url::parse(domain)?
    } else {
        Url::parse(&format!("http://{}", domain))?
    };
    url.path_segments_mut()
        .map_err(|_| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
        .pop_if_empty()
        .push(key);
    Ok(url)
}

/// Unix time `expiry_secs` after `now`, clamped instead of overflowing.
fn expiry_deadline(now: i64, expiry_secs: u64) -> i64 {
    now.saturating_add(i64::try_from(expiry_secs).unwrap_or(i64::MAX))
}

/// Converts the service's 100ns-precision upload timestamp.
fn from_put_time(put_time: i64) -> DateTime<Utc> {
    Utc.timestamp_nanos(put_time.saturating_mul(100))
}

fn service_error(status: u16, body: &[u8], key: &str) -> StorageError {
    if status == KODO_NO_SUCH_ENTRY || status == 404 {
        return StorageError::NotFound(key.to_string());
    }
    let message = match serde_json::from_slice::<ErrorResponse>(body) {
        Ok(err) => err.error,
        Err(_) => String::from_utf8_lossy(body).into_owned(),
    };
    warn!("Kodo replied {} for {:?}: {}", status, key, message);
    StorageError::Service { status, message }
}
