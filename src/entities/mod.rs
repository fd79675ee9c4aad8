mod actions;
mod api;
mod error;
mod events;
mod normalize;
mod schema;


pub use actions::EntityActions;
pub use api::{ApiClient, ApiResponse, RestClient};
pub use error::{ActionError, RequestError};
pub use events::{ActionEvent, ChannelDispatch, Dispatch, StateReader};
pub use normalize::{normalize, NormalizedResult};
pub use schema::{ActionKeyTriple, ActionKeys, EntitySchema, Relation};

pub use reqwest::Method;
