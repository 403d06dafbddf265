/// Represents a customer order.
///
/// Cost is derived, never entered: it is recomputed as the sum of the
/// product prices whenever a draft is committed. The product list is
/// present when the order was composed locally or echoed back by the API;
/// bare reads leave it empty and the association rows carry the truth.
use super::{CustomerId, OrderId, Product};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

/// Treats an explicit wire `null` as the field's default (bare reads send
/// `"Products": null`; the association rows carry the truth).
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Order {
    pub id: OrderId,
    pub cost: Decimal,
    pub date_of_order: DateTime<Utc>,
    pub is_favorited: bool,
    pub status: String,
    #[serde(default)]
    pub customer_id: Option<CustomerId>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub products: Vec<Product>,
}

impl Order {
    /// Status a freshly committed order starts in.
    pub const INITIAL_STATUS: &'static str = "Not Ordered";
}
