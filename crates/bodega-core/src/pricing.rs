//! # Pricing Engine
//!
//! Computes a product's sale price for a given date.
//!
//! ## Price Formula
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  base        = product.unit_price                                   │
//! │  marked_up   = base × (1 + markup_rate[category])                   │
//! │  final       = marked_up × (1 − discount_rate)   if date falls      │
//! │                                                  in the discount    │
//! │                                                  window             │
//! │  sale price  = round(final, 2 decimals, half-up)                    │
//! │                                                                     │
//! │  Rounding happens ONCE, as the last step.                           │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The engine is date-semantics-agnostic: callers decide what `date`
//! means. Basket valuation passes a batch's effective expiry date; a host
//! asking "what would this cost today" passes the literal query date.
//!
//! Pure function of its inputs — no hidden state, safe to call from
//! read-only valuation paths.

use chrono::{Duration, NaiveDate};
use rust_decimal::Decimal;

use crate::error::{ShopError, ShopResult};
use crate::money::{apply_discount, apply_markup, round_money};
use crate::types::{ProductCatalog, Shop};

/// Checks whether a date falls inside the shop's near-expiry discount
/// window, i.e. strictly before `today + days_before_expiry_discount`.
///
/// A date already in the past is inside the window too.
#[inline]
pub fn is_close_to_expiry(shop: &Shop, date: NaiveDate, today: NaiveDate) -> bool {
    date < today + Duration::days(shop.days_before_expiry_discount)
}

/// Computes the sale price of one unit of a product for a given date.
///
/// `today` anchors the discount window; resolve it from the injected
/// [`Clock`](crate::clock::Clock) at the call boundary.
///
/// ## Errors
/// - `ProductNotFound` if the catalog has no entry for `product_id`
/// - `MissingMarkup` if the shop has no markup rate for the product's
///   category
pub fn price_on_date(
    shop: &Shop,
    catalog: &ProductCatalog,
    product_id: &str,
    date: NaiveDate,
    today: NaiveDate,
) -> ShopResult<Decimal> {
    let product = catalog.require(product_id)?;
    let markup = shop
        .markup_rate(product.category)
        .ok_or(ShopError::MissingMarkup(product.category))?;

    let mut price = apply_markup(product.unit_price, markup);
    if is_close_to_expiry(shop, date, today) {
        price = apply_discount(price, shop.discount_rate);
    }
    Ok(round_money(price))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Category, Product};
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn shop_and_catalog() -> (Shop, ProductCatalog) {
        let mut shop = Shop::new("Corner Shop", 3, dec!(0.20)).unwrap();
        shop.set_markup(Category::Food, dec!(0.10)).unwrap();

        let mut catalog = ProductCatalog::new();
        catalog
            .insert(Product::perishable(
                "CHEESE",
                "Soft Cheese",
                dec!(2.99),
                Category::Food,
                10,
            ))
            .unwrap();
        (shop, catalog)
    }

    #[test]
    fn test_price_inside_discount_window() {
        let (shop, catalog) = shop_and_catalog();
        let today = date(2024, 5, 15);

        // 2.99 × 1.10 × 0.80 = 2.6312 → 2.63
        let price = price_on_date(&shop, &catalog, "CHEESE", date(2024, 5, 16), today).unwrap();
        assert_eq!(price, dec!(2.63));
    }

    #[test]
    fn test_price_outside_discount_window() {
        let (shop, catalog) = shop_and_catalog();
        let today = date(2024, 5, 15);

        // Window ends strictly before today + 3 days
        // 2.99 × 1.10 = 3.289 → 3.29
        let price = price_on_date(&shop, &catalog, "CHEESE", date(2024, 5, 18), today).unwrap();
        assert_eq!(price, dec!(3.29));
    }

    #[test]
    fn test_window_boundary_is_strict() {
        let (shop, _) = shop_and_catalog();
        let today = date(2024, 5, 15);

        assert!(is_close_to_expiry(&shop, date(2024, 5, 17), today));
        assert!(!is_close_to_expiry(&shop, date(2024, 5, 18), today));
        // A date already past still discounts
        assert!(is_close_to_expiry(&shop, date(2024, 5, 1), today));
    }

    #[test]
    fn test_unknown_product_fails() {
        let (shop, catalog) = shop_and_catalog();
        let today = date(2024, 5, 15);

        assert!(matches!(
            price_on_date(&shop, &catalog, "MYSTERY", today, today),
            Err(ShopError::ProductNotFound(_))
        ));
    }

    #[test]
    fn test_missing_markup_rate_fails() {
        let (shop, mut catalog) = shop_and_catalog();
        catalog
            .insert(Product::non_perishable(
                "SOAP",
                "Bar Soap",
                dec!(0.80),
                Category::NonFood,
            ))
            .unwrap();
        let today = date(2024, 5, 15);

        // Shop only configured a Food rate
        assert!(matches!(
            price_on_date(&shop, &catalog, "SOAP", today, today),
            Err(ShopError::MissingMarkup(Category::NonFood))
        ));
    }
}
