//! Typed clients over the remote data API, one per entity kind.
//!
//! Each client wraps a generic
//! [`ResourceEndpoint`](snackbar_gateway::ResourceEndpoint), inherits the
//! uniform operations through [`ApiClient`](snackbar_gateway::ApiClient),
//! and adds the routes specific to its entity (authentication lookups,
//! per-customer order lists, detail materialization).

pub mod customers;
pub mod order_products;
pub mod orders;
pub mod owners;
pub mod products;
pub mod transactions;

pub use customers::CustomersClient;
pub use order_products::OrderProductsClient;
pub use orders::OrdersClient;
pub use owners::OwnersClient;
pub use products::ProductsClient;
pub use transactions::TransactionsClient;
