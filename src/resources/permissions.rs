//! Caller-owned permission lookup cache.
//!
//! Permission lookups answer "may this user act on this resource" and are
//! cheap to cache, but the cache must stay under the caller's control: it
//! is an ordinary value the caller creates, injects where needed, and
//! refreshes or invalidates explicitly. There is no process-wide state.

use std::collections::HashMap;

use serde_json::Value;

use crate::clients::{ApiError, PathSegments, ResourceId};
use crate::resources::{paths, ResourceClient};

/// A cache of permission-lookup results, keyed by (resource, user id).
///
/// Entries only change through [`refresh`](Self::refresh) and the
/// `invalidate` methods; a cached result is served as-is until the caller
/// decides it is stale.
///
/// # Example
///
/// ```rust,ignore
/// use roadsafety_api::resources::{paths, PermissionCache};
///
/// let mut cache = PermissionCache::new();
/// let granted = cache.refresh(&client, paths::DATASETS, 9).await?;
/// assert_eq!(cache.get(paths::DATASETS, 9), Some(granted));
///
/// // After a role change server-side:
/// cache.invalidate(paths::DATASETS, 9);
/// ```
#[derive(Clone, Debug, Default)]
pub struct PermissionCache {
    entries: HashMap<(String, u64), bool>,
}

impl PermissionCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached result for a lookup, if present.
    #[must_use]
    pub fn get(&self, resource: &str, user_id: u64) -> Option<bool> {
        self.entries.get(&(resource.to_string(), user_id)).copied()
    }

    /// Fetches a permission lookup from the server and caches the result.
    ///
    /// Issues `GET {base}/{version}/permissions/{resource}/{user_id}` and
    /// interprets the body as granted when it is `true` or
    /// `{"granted": true}`. An application-level Error response caches as
    /// not granted.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport or server contract failure; the
    /// cache entry is left untouched in that case.
    pub async fn refresh(
        &mut self,
        client: &ResourceClient,
        resource: &str,
        user_id: u64,
    ) -> Result<bool, ApiError> {
        let response = client
            .get(
                paths::PERMISSIONS,
                None,
                PathSegments::Many(vec![
                    ResourceId::from(resource),
                    ResourceId::Int(user_id),
                ]),
                None,
            )
            .await?;

        let granted = response.is_success()
            && response.body.as_ref().map_or(false, Self::body_grants);
        self.entries.insert((resource.to_string(), user_id), granted);
        Ok(granted)
    }

    fn body_grants(body: &Value) -> bool {
        body.as_bool()
            .or_else(|| body.get("granted").and_then(Value::as_bool))
            .unwrap_or(false)
    }

    /// Removes one cached entry. Returns `true` if an entry was present.
    pub fn invalidate(&mut self, resource: &str, user_id: u64) -> bool {
        self.entries
            .remove(&(resource.to_string(), user_id))
            .is_some()
    }

    /// Removes every cached entry.
    pub fn invalidate_all(&mut self) {
        self.entries.clear();
    }

    /// Returns the number of cached entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the cache holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{AuthContext, Credential};
    use crate::config::{ApiConfig, BaseUrl, Environment, PrivateKey, PublicKey};
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> ResourceClient {
        let config = ApiConfig::builder()
            .environment(Environment::Custom(BaseUrl::new(server.uri()).unwrap()))
            .build();
        ResourceClient::new(
            config,
            AuthContext::app_only(Credential::new(
                1,
                PublicKey::new("app-pub").unwrap(),
                PrivateKey::new("app-priv").unwrap(),
            )),
        )
    }

    async fn mount_lookup(server: &MockServer, resource: &str, user_id: u64, body: &str) {
        Mock::given(method("GET"))
            .and(path(format!("/v1/permissions/{resource}/{user_id}")))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("Status", "Success")
                    .set_body_string(body),
            )
            .mount(server)
            .await;
    }

    #[test]
    fn test_empty_cache_has_no_entries() {
        let cache = PermissionCache::new();
        assert!(cache.is_empty());
        assert_eq!(cache.get(paths::DATASETS, 9), None);
    }

    #[tokio::test]
    async fn test_refresh_caches_boolean_body() {
        let server = MockServer::start().await;
        mount_lookup(&server, "datasets", 9, "true").await;

        let client = client_for(&server);
        let mut cache = PermissionCache::new();

        let granted = cache.refresh(&client, paths::DATASETS, 9).await.unwrap();
        assert!(granted);
        assert_eq!(cache.get(paths::DATASETS, 9), Some(true));
        assert_eq!(cache.len(), 1);
    }

    #[tokio::test]
    async fn test_refresh_caches_granted_object_body() {
        let server = MockServer::start().await;
        mount_lookup(&server, "projects", 4, r#"{"granted": false}"#).await;

        let client = client_for(&server);
        let mut cache = PermissionCache::new();

        let granted = cache.refresh(&client, paths::PROJECTS, 4).await.unwrap();
        assert!(!granted);
        assert_eq!(cache.get(paths::PROJECTS, 4), Some(false));
    }

    #[tokio::test]
    async fn test_error_response_caches_as_not_granted() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/permissions/users/2"))
            .respond_with(
                ResponseTemplate::new(403)
                    .insert_header("Status", "Error")
                    .insert_header("Error", "not allowed")
                    .set_body_string("{}"),
            )
            .mount(&server)
            .await;

        let client = client_for(&server);
        let mut cache = PermissionCache::new();

        let granted = cache.refresh(&client, paths::USERS, 2).await.unwrap();
        assert!(!granted);
        assert_eq!(cache.get(paths::USERS, 2), Some(false));
    }

    #[tokio::test]
    async fn test_invalidate_removes_single_entry() {
        let server = MockServer::start().await;
        mount_lookup(&server, "datasets", 9, "true").await;
        mount_lookup(&server, "datasets", 10, "true").await;

        let client = client_for(&server);
        let mut cache = PermissionCache::new();
        cache.refresh(&client, paths::DATASETS, 9).await.unwrap();
        cache.refresh(&client, paths::DATASETS, 10).await.unwrap();

        assert!(cache.invalidate(paths::DATASETS, 9));
        assert!(!cache.invalidate(paths::DATASETS, 9));
        assert_eq!(cache.get(paths::DATASETS, 9), None);
        assert_eq!(cache.get(paths::DATASETS, 10), Some(true));
    }

    #[tokio::test]
    async fn test_invalidate_all_clears_cache() {
        let server = MockServer::start().await;
        mount_lookup(&server, "regions", 1, "true").await;

        let client = client_for(&server);
        let mut cache = PermissionCache::new();
        cache.refresh(&client, paths::REGIONS, 1).await.unwrap();

        cache.invalidate_all();
        assert!(cache.is_empty());
    }
}
