use super::api::ApiClient;
use super::error::{ActionError, RequestError};
use super::events::{ActionEvent, Dispatch, StateReader};
use super::normalize::{normalize, NormalizedResult};
use super::schema::{ActionKeys, EntitySchema};
use reqwest::Method;
use serde_json::{json, Value};
use std::sync::Arc;

/// The four lifecycle operations for one entity schema
///
/// Each operation emits a request event, performs exactly one call, and
/// emits a success or failure event before returning. Failures carry
/// rollback context and are rethrown to the caller; there is no retry.
pub struct EntityActions<C: ApiClient> {
    schema: Arc<EntitySchema>,
    keys: ActionKeys,
    client: C,
    dispatch: Box<dyn Dispatch>,
}

impl<C: ApiClient> EntityActions<C> {
    pub fn new(schema: Arc<EntitySchema>, client: C, dispatch: impl Dispatch + 'static) -> Self {
        let keys = ActionKeys::for_key(schema.key());
        Self {
            schema,
            keys,
            client,
            dispatch: Box::new(dispatch),
        }
    }

    pub fn keys(&self) -> &ActionKeys {
        &self.keys
    }

    fn emit(&self, event: ActionEvent) {
        self.dispatch.dispatch(event);
    }

    fn fail(&self, event: ActionEvent, error: RequestError, rollback: Option<Value>) -> ActionError {
        tracing::error!(error = %error, "entity request failed");
        self.emit(event);
        ActionError::with_rollback(error, rollback)
    }

    /// Fetch one entity by id and normalize it
    pub async fn get_by_id(
        &self,
        id: &str,
        body: Option<Value>,
    ) -> Result<NormalizedResult, ActionError> {
        let keys = &self.keys.get_single;
        self.emit(ActionEvent::new(&keys.request).with("id", json!(id)));

        let path = format!("{}/{}", self.schema.key(), id);
        match self.client.call(&path, Method::GET, body).await {
            Ok(response) => {
                let normalized = normalize(&self.schema, &response.data);
                let mut success = ActionEvent::new(&keys.success).with("id", json!(id));
                success.payload.extend(normalized.payload_fields());
                self.emit(success);
                Ok(normalized)
            }
            Err(error) => Err(self.fail(
                ActionEvent::new(&keys.failure).with("id", json!(id)),
                error,
                None,
            )),
        }
    }

    /// Create a new entity
    pub async fn create(&self, data: Value) -> Result<NormalizedResult, ActionError> {
        let keys = &self.keys.create;
        self.emit(ActionEvent::new(&keys.request).with("data", data.clone()));

        let path = format!("{}/", self.schema.key());
        let body = json!({ "data": data });
        match self.client.call(&path, Method::POST, Some(body)).await {
            Ok(response) => {
                let normalized = normalize(&self.schema, &response.data);
                let mut success = ActionEvent::new(&keys.success);
                success.payload.extend(normalized.payload_fields());
                self.emit(success);
                Ok(normalized)
            }
            Err(error) => Err(self.fail(
                ActionEvent::new(&keys.failure).with("data", data),
                error,
                None,
            )),
        }
    }

    /// Update an entity in place
    ///
    /// `old_data` rides the failure path so an optimistic update can be
    /// rolled back.
    pub async fn update_by_id(
        &self,
        id: &str,
        old_data: Value,
        new_data: Value,
        update_fields: Vec<String>,
    ) -> Result<(), ActionError> {
        let keys = &self.keys.update;
        self.emit(
            ActionEvent::new(&keys.request)
                .with("id", json!(id))
                .with("new_data", new_data.clone()),
        );

        let path = format!("{}/{}", self.schema.key(), id);
        let body = json!({ "data": new_data });
        match self.client.call(&path, Method::PATCH, Some(body)).await {
            Ok(_) => {
                self.emit(
                    ActionEvent::new(&keys.success)
                        .with("id", json!(id))
                        .with("new_data", new_data)
                        .with("update_fields", json!(update_fields)),
                );
                Ok(())
            }
            Err(error) => Err(self.fail(
                ActionEvent::new(&keys.failure)
                    .with("id", json!(id))
                    .with("old_data", old_data.clone()),
                error,
                Some(old_data),
            )),
        }
    }

    /// Delete an entity
    ///
    /// Current state is captured before the call so the failure event
    /// can restore it.
    pub async fn delete(&self, id: &str, state: &dyn StateReader) -> Result<(), ActionError> {
        let keys = &self.keys.delete;
        let prior = state.entity(self.schema.key(), id);

        self.emit(ActionEvent::new(&keys.request).with("id", json!(id)));

        let path = format!("{}/{}", self.schema.key(), id);
        match self.client.call(&path, Method::DELETE, None).await {
            Ok(_) => {
                self.emit(ActionEvent::new(&keys.success).with("id", json!(id)));
                Ok(())
            }
            Err(error) => Err(self.fail(
                ActionEvent::new(&keys.failure)
                    .with("id", json!(id))
                    .with("entity", prior.clone().unwrap_or(Value::Null)),
                error,
                prior,
            )),
        }
    }
}
