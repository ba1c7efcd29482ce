use crate::RevenuePolicy;
use core_types::{LineItem, Product};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Revenue after the item's percentage discount.
///
/// `sale_price * quantity * (1 - discount / 100)`. The discount is not clamped:
/// a discount above 100 yields negative revenue and a negative discount acts as
/// a markup. Returns `None` when the result does not fit in a `Decimal`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleRevenue;

impl RevenuePolicy for SimpleRevenue {
    fn calculate(&self, item: &LineItem, _product: &Product) -> Option<Decimal> {
        let discount = Decimal::ONE.checked_sub(item.discount.checked_div(dec!(100))?)?;
        item.sale_price
            .checked_mul(Decimal::from(item.quantity))?
            .checked_mul(discount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product() -> Product {
        Product {
            sku: "SKU_001".into(),
            purchase_price: dec!(60),
            quantity: 3,
        }
    }

    fn item(quantity: u32, sale_price: Decimal, discount: Decimal) -> LineItem {
        LineItem {
            sku: "SKU_001".into(),
            quantity,
            sale_price,
            discount,
        }
    }

    #[test]
    fn applies_percentage_discount() {
        let revenue = SimpleRevenue.calculate(&item(2, dec!(100), dec!(10)), &product()).unwrap();
        assert_eq!(revenue, dec!(180));
    }

    #[test]
    fn zero_discount_is_full_price() {
        let revenue = SimpleRevenue.calculate(&item(3, dec!(19.99), dec!(0)), &product()).unwrap();
        assert_eq!(revenue, dec!(59.97));
    }

    #[test]
    fn out_of_range_discounts_are_applied_arithmetically() {
        let over = SimpleRevenue.calculate(&item(1, dec!(100), dec!(150)), &product()).unwrap();
        assert_eq!(over, dec!(-50));

        let markup = SimpleRevenue.calculate(&item(1, dec!(100), dec!(-20)), &product()).unwrap();
        assert_eq!(markup, dec!(120));
    }

    #[test]
    fn ignores_product_attributes() {
        let mut expensive = product();
        expensive.purchase_price = dec!(1000);
        expensive.quantity = 50;

        let line = item(2, dec!(100), dec!(10));
        assert_eq!(
            SimpleRevenue.calculate(&line, &expensive),
            SimpleRevenue.calculate(&line, &product())
        );
    }

    #[test]
    fn overflowing_revenue_is_none() {
        let huge = item(3, Decimal::from_str_exact("50000000000000000000000000000").unwrap(), dec!(0));
        assert_eq!(SimpleRevenue.calculate(&huge, &product()), None);
    }
}
