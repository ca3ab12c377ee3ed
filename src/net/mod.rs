//! Network layer: wire types and the REST client for `/api/profiles`.

pub mod api;
pub mod types;

pub use api::{ApiError, ProfileApi, ProfileStore};
pub use types::Profile;
