/// Association row linking an order to a product.
///
/// Quantity lives here as an explicit `amount`; a product ordered twice is
/// one row with `amount == 2`, never two rows and never two fetches.
use super::{OrderId, Product, ProductId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OrderProduct {
    pub order_id: OrderId,
    pub product_id: ProductId,
    pub amount: u32,
}

impl OrderProduct {
    /// Collapses a repeated-product list (the shape drafts use) into
    /// association rows, one per distinct product id, preserving first-seen
    /// order.
    pub fn aggregate(order_id: OrderId, products: &[Product]) -> Vec<OrderProduct> {
        let mut rows: Vec<OrderProduct> = Vec::new();
        for product in products {
            if let Some(row) = rows.iter_mut().find(|r| r.product_id == product.id) {
                row.amount += 1;
            } else {
                rows.push(OrderProduct {
                    order_id,
                    product_id: product.id,
                    amount: 1,
                });
            }
        }
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn aggregate_counts_repeated_products() {
        let cola = Product::new(ProductId(1), "Cola", dec!(1.50));
        let chips = Product::new(ProductId(2), "Chips", dec!(2.25));
        let products = vec![cola.clone(), chips.clone(), cola.clone()];

        let rows = OrderProduct::aggregate(OrderId(7), &products);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].product_id, ProductId(1));
        assert_eq!(rows[0].amount, 2);
        assert_eq!(rows[1].product_id, ProductId(2));
        assert_eq!(rows[1].amount, 1);
        assert!(rows.iter().all(|r| r.order_id == OrderId(7)));
    }
}
