//! Read models assembled for the browser-facing pages.
//!
//! These structs never travel over the wire themselves; they are composed
//! from gateway reads (and the current draft) by the workflow's view
//! queries.

use super::{Customer, Order, Product};
use crate::draft::OrderDraft;

/// One materialized order line: the product once, with its quantity.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderLine {
    pub product: Product,
    pub quantity: u32,
}

/// An order with its lines materialized from the association rows.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderDetail {
    pub order: Order,
    pub lines: Vec<OrderLine>,
}

impl OrderDetail {
    /// Flattens the lines into a repeated-product list — the shape drafts
    /// use, and the only place quantity is expanded into repetition.
    pub fn expanded_products(&self) -> Vec<Product> {
        let mut products = Vec::new();
        for line in &self.lines {
            for _ in 0..line.quantity {
                products.push(line.product.clone());
            }
        }
        products
    }
}

/// A customer's orders plus the favorited subset, as shown on the orders page.
#[derive(Debug, Clone)]
pub struct OrdersOverview {
    pub orders: Vec<Order>,
    pub favorites: Vec<Order>,
    pub customer: Customer,
}

/// The order-building page: the session's current draft plus the catalog.
#[derive(Debug, Clone)]
pub struct CreateOrderView {
    pub draft: OrderDraft,
    pub catalog: Vec<Product>,
}

/// An order's detail page: the order, its owning customer when resolvable,
/// and its product lines.
#[derive(Debug, Clone)]
pub struct OrderDetailView {
    pub order: Order,
    pub customer: Option<Customer>,
    pub lines: Vec<OrderLine>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{OrderId, ProductId};
    use chrono::Utc;
    use rust_decimal_macros::dec;

    #[test]
    fn expansion_repeats_products_by_quantity() {
        let pretzel = Product::new(ProductId(3), "Pretzel", dec!(2.75));
        let detail = OrderDetail {
            order: Order {
                id: OrderId(7),
                cost: dec!(5.50),
                date_of_order: Utc::now(),
                is_favorited: false,
                status: Order::INITIAL_STATUS.to_string(),
                customer_id: None,
                products: Vec::new(),
            },
            lines: vec![OrderLine {
                product: pretzel.clone(),
                quantity: 2,
            }],
        };

        let expanded = detail.expanded_products();
        assert_eq!(expanded.len(), 2);
        assert!(expanded.iter().all(|p| p.id == pretzel.id));
    }
}
