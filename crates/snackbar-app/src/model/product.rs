/// Represents a product in the snackbar's catalog.
///
/// Read-only reference data from the workflow's perspective: drafts and
/// orders hold copies of whatever the catalog served, and stock/pricing are
/// owned by the remote API.
use super::ProductId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Decimal,
    #[serde(default)]
    pub discount: i32,
    #[serde(default)]
    pub stock: i32,
    #[serde(default)]
    pub img_path: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl Product {
    /// Creates a new Product instance.
    ///
    /// # Arguments
    /// * `id` - Unique identifier (assigned by the remote API)
    /// * `name` - Product name
    /// * `price` - Unit price
    pub fn new(id: ProductId, name: impl Into<String>, price: Decimal) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            discount: 0,
            stock: 0,
            img_path: None,
            description: None,
        }
    }
}
