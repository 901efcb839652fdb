//! # Registry Client
//!
//! Issues and checks access keys against the registry actor.
use crate::model::{ApiId, GeneratedApi, GeneratedApiCreate, GeneratedSpec, IssuedApi};
use crate::registry_actor::RegistryError;
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the registry actor.
#[derive(Clone)]
pub struct RegistryClient {
    inner: ResourceClient<GeneratedApi>,
}

impl RegistryClient {
    pub fn new(inner: ResourceClient<GeneratedApi>) -> Self {
        Self { inner }
    }

    /// Records a new generated API and returns its registry ID and fresh access key.
    #[instrument(skip(self, generated))]
    pub async fn issue(
        &self,
        prompt: String,
        generated: GeneratedSpec,
    ) -> Result<IssuedApi, RegistryError> {
        debug!("Sending request");
        let api = self
            .inner
            .create(GeneratedApiCreate { prompt, generated })
            .await
            .map_err(Self::map_error)?;
        Ok(IssuedApi {
            id: api.id,
            key: api.key,
        })
    }

    /// Looks up the record holding `key`. `None` means the key was never issued.
    #[instrument(skip_all)]
    pub async fn authorize(&self, key: &str) -> Result<Option<GeneratedApi>, RegistryError> {
        let key = key.to_string();
        let found = self
            .inner
            .find(move |api: &GeneratedApi| api.key == key)
            .await
            .map_err(Self::map_error)?;
        debug!(registry_id = ?found.as_ref().map(|api| &api.id), "Authorize");
        Ok(found)
    }

    /// Like [`ActorClient::get`], but a missing record is an error.
    pub async fn fetch(&self, id: ApiId) -> Result<GeneratedApi, RegistryError> {
        let missing = RegistryError::NotFound(id.to_string());
        self.get(id).await?.ok_or(missing)
    }
}

#[async_trait]
impl ActorClient<GeneratedApi> for RegistryClient {
    type Error = RegistryError;

    fn inner(&self) -> &ResourceClient<GeneratedApi> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::EntityError(inner) => match inner.downcast::<RegistryError>() {
                Ok(registry_error) => *registry_error,
                Err(other) => RegistryError::ActorCommunicationError(other.to_string()),
            },
            FrameworkError::Storage(e) => RegistryError::Storage(e.to_string()),
            other => RegistryError::ActorCommunicationError(other.to_string()),
        }
    }
}
