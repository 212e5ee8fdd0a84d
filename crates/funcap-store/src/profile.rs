//! The hosted evaluator-profile document store.
//!
//! Profiles live as JSON documents in a hosted bucket, keyed by profile
//! id. The report core reads them in a single attempt with no retry;
//! writes belong to the separate profile-editing surface.

use std::future::Future;

use aws_sdk_s3::Client;
use funcap_core::models::evaluator::EvaluatorProfile;
use funcap_core::store_keys;
use tracing::debug;

use crate::error::StorageError;

/// Get a raw object from the hosted store.
pub async fn get_object(client: &Client, bucket: &str, key: &str) -> Result<Vec<u8>, StorageError> {
    let resp = client
        .get_object()
        .bucket(bucket)
        .key(key)
        .send()
        .await
        .map_err(|e| {
            let err = e.into_service_error();
            if err.is_no_such_key() {
                StorageError::NotFound {
                    key: key.to_string(),
                }
            } else {
                StorageError::GetObject(err.to_string())
            }
        })?;

    let body = resp
        .body
        .collect()
        .await
        .map_err(|e| StorageError::GetObject(e.to_string()))?
        .into_bytes()
        .to_vec();

    Ok(body)
}

/// A source of hosted evaluator profiles. The report engine takes one of
/// these so the hosted fallback can be swapped for a local double in
/// tests.
pub trait ProfileSource {
    fn fetch(
        &self,
        profile_id: &str,
    ) -> impl Future<Output = Result<Option<EvaluatorProfile>, StorageError>> + Send;
}

/// The hosted profile document store: an S3 bucket of
/// `profiles/{id}.json` documents.
pub struct HostedProfileStore {
    client: Client,
    bucket: String,
}

impl HostedProfileStore {
    pub fn new(client: Client, bucket: impl Into<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
        }
    }
}

impl ProfileSource for HostedProfileStore {
    async fn fetch(&self, profile_id: &str) -> Result<Option<EvaluatorProfile>, StorageError> {
        fetch_profile(&self.client, &self.bucket, profile_id).await
    }
}

/// In-memory profile source; the test double.
#[derive(Debug, Default)]
pub struct MemoryProfileSource {
    profiles: std::collections::HashMap<String, EvaluatorProfile>,
}

impl MemoryProfileSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, profile: EvaluatorProfile) {
        self.profiles.insert(profile.id.clone(), profile);
    }
}

impl ProfileSource for MemoryProfileSource {
    async fn fetch(&self, profile_id: &str) -> Result<Option<EvaluatorProfile>, StorageError> {
        Ok(self.profiles.get(profile_id).cloned())
    }
}

/// Fetch an evaluator profile document. `Ok(None)` when no document
/// exists for the id.
pub async fn fetch_profile(
    client: &Client,
    bucket: &str,
    profile_id: &str,
) -> Result<Option<EvaluatorProfile>, StorageError> {
    let key = store_keys::profile_document(profile_id);
    match get_object(client, bucket, &key).await {
        Ok(body) => {
            let profile: EvaluatorProfile = serde_json::from_slice(&body)?;
            debug!(profile_id, "loaded hosted evaluator profile");
            Ok(Some(profile))
        }
        Err(StorageError::NotFound { .. }) => {
            debug!(profile_id, "no hosted evaluator profile");
            Ok(None)
        }
        Err(e) => Err(e),
    }
}
