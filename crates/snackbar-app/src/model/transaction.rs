use super::{CustomerId, OrderId, TransactionId};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Checkout record derived from a committed order.
///
/// Cost is copied from the order, discount is the sum of the constituent
/// products' discounts, and the timestamp is the promotion instant — not
/// the order's creation instant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Transaction {
    pub id: TransactionId,
    pub cost: Decimal,
    pub discount: i32,
    pub date_of_transaction: DateTime<Utc>,
    #[serde(default)]
    pub customer_id: Option<CustomerId>,
    pub order_id: OrderId,
}
