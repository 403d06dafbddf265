//! Pure data structures for the snackbar domain.
//!
//! Entities mirror the remote API's resource shapes; wire member names are
//! PascalCase (`#[serde(rename_all = "PascalCase")]` on every entity). The
//! identifier newtypes keep lookups type-safe across clients, drafts and the
//! workflow — an order id cannot be handed to the product catalog.

pub mod customer;
pub mod order;
pub mod order_product;
pub mod owner;
pub mod product;
pub mod transaction;
pub mod views;

pub use customer::Customer;
pub use order::Order;
pub use order_product::OrderProduct;
pub use owner::Owner;
pub use product::Product;
pub use transaction::Transaction;
pub use views::{CreateOrderView, OrderDetail, OrderDetailView, OrderLine, OrdersOverview};

/// Stamps out the identifier newtype for an entity kind: a `u32` wrapper
/// with the conversions and formatting every id needs. `Display` renders the
/// bare number, which is also the path segment the remote API expects.
macro_rules! entity_id {
    ($entity:ident) => {
        paste::paste! {
            #[doc = concat!("Type-safe identifier for [`", stringify!($entity), "`] records.")]
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
            pub struct [<$entity Id>](pub u32);

            impl From<u32> for [<$entity Id>] {
                fn from(id: u32) -> Self {
                    Self(id)
                }
            }

            impl std::fmt::Display for [<$entity Id>] {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    write!(f, "{}", self.0)
                }
            }
        }
    };
}

entity_id!(Product);
entity_id!(Order);
entity_id!(Customer);
entity_id!(Transaction);
entity_id!(Owner);
