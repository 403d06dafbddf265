//! # ApiResource Trait
//!
//! The `ApiResource` trait is the contract every remote entity kind (Product,
//! Order, Customer, …) must implement to be served by the generic
//! [`ResourceEndpoint`](crate::endpoint::ResourceEndpoint). It binds the
//! entity to its identifier type and to the resource-oriented paths the
//! remote API exposes for it.
//!
//! # Architecture Note
//! By defining a contract (`ApiResource`) that all our entity types satisfy,
//! we write the HTTP plumbing *once* and reuse it for every kind. The
//! associated `Id` type keeps lookups type-safe: a `ProductId` cannot be
//! handed to the Orders endpoint.
//!
//! # Provided Methods
//! The path builders have default implementations that follow the API's
//! uniform `api/{Collection}/` and `api/{Collection}/{id}` shape. An entity
//! only overrides [`ApiResource::read_path`] when its read route deviates
//! (the remote serves single orders under `api/Orders/SpecificOrder/{id}`).

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::{Debug, Display};

/// Contract for an entity kind managed by a [`ResourceEndpoint`].
///
/// [`ResourceEndpoint`]: crate::endpoint::ResourceEndpoint
pub trait ApiResource: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// The unique identifier for this entity. `Display` must render the raw
    /// path segment the remote expects (for numeric ids, just the number).
    type Id: Clone + Debug + Display + Send + Sync;

    /// Collection segment under `api/`, e.g. `"Products"`.
    const COLLECTION: &'static str;

    /// Path of the collection, used for list and create.
    fn collection_path() -> String {
        format!("api/{}/", Self::COLLECTION)
    }

    /// Path of a single item, used for update and delete.
    fn item_path(id: &Self::Id) -> String {
        format!("api/{}/{}", Self::COLLECTION, id)
    }

    /// Path a single item is read from. Defaults to [`Self::item_path`].
    fn read_path(id: &Self::Id) -> String {
        Self::item_path(id)
    }
}
