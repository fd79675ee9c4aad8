use serde_json::{Map, Value};
use tokio::sync::mpsc;

/// A lifecycle event, named by the schema's action keys
#[derive(Debug, Clone, PartialEq)]
pub struct ActionEvent {
    pub name: String,
    pub payload: Map<String, Value>,
}

impl ActionEvent {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            payload: Map::new(),
        }
    }

    pub fn with(mut self, field: &str, value: Value) -> Self {
        self.payload.insert(field.to_string(), value);
        self
    }
}

/// Observer seam for lifecycle events
///
/// Operations emit request/success/failure events as data; no store is
/// mutated implicitly.
pub trait Dispatch: Send + Sync {
    fn dispatch(&self, event: ActionEvent);
}

/// Delivers events over an unbounded channel the caller drains
pub struct ChannelDispatch {
    sender: mpsc::UnboundedSender<ActionEvent>,
}

impl ChannelDispatch {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<ActionEvent>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }
}

impl Dispatch for ChannelDispatch {
    fn dispatch(&self, event: ActionEvent) {
        // A dropped receiver means nobody is observing anymore
        let _ = self.sender.send(event);
    }
}

/// Read access to current entity state
///
/// Delete captures the prior entity through this before issuing its
/// call, so the failure event can carry rollback state.
pub trait StateReader: Send + Sync {
    fn entity(&self, schema_key: &str, id: &str) -> Option<Value>;
}
