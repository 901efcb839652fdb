//! [`ActorEntity`] implementation for [`GeneratedApi`] records.
//!
//! The access key is minted here, inside the actor, so it never travels through a create
//! payload (which is logged at debug level).

use crate::model::{ApiId, GeneratedApi, GeneratedApiCreate};
use crate::registry_actor::RegistryError;
use actor_framework::ActorEntity;
use chrono::Utc;
use uuid::Uuid;

impl ActorEntity for GeneratedApi {
    type Id = ApiId;
    type Create = GeneratedApiCreate;
    type Error = RegistryError;

    fn id(&self) -> &ApiId {
        &self.id
    }

    fn from_create_params(id: ApiId, params: GeneratedApiCreate) -> Result<Self, Self::Error> {
        Ok(GeneratedApi {
            id,
            key: Uuid::new_v4().to_string(),
            prompt: params.prompt,
            runtime: params.generated.runtime,
            spec: Some(params.generated.spec),
            created_at: Some(Utc::now()),
        })
    }
}
