//! Offer selection - cheapest variant that can actually fill the order

use super::model::Product;

/// The selected purchasable offer for a product
#[derive(Debug, Clone, PartialEq)]
pub struct Offer {
    /// Vendor's own part number for the chosen variant
    pub vendor_part_number: String,

    /// Unit price at the applicable break
    pub unit_price: f64,

    /// Stock available for the chosen variant
    pub available: u32,
}

/// Pick the cheapest offer that can fill `order_quantity`.
///
/// Variants with no stock or an MOQ above the order are skipped, as are
/// price breaks whose break quantity the order does not reach. Returns
/// `None` when nothing qualifies; the line then stays unpriced.
pub fn best_offer(product: &Product, order_quantity: u32) -> Option<Offer> {
    let mut best: Option<Offer> = None;

    for variation in &product.variations {
        if variation.quantity_available == 0 || variation.minimum_order_quantity > order_quantity {
            continue;
        }

        for pricing in &variation.standard_pricing {
            if pricing.break_quantity > order_quantity {
                continue;
            }
            let beats_best = best
                .as_ref()
                .is_none_or(|b| pricing.unit_price < b.unit_price);
            if beats_best {
                best = Some(Offer {
                    vendor_part_number: variation.digikey_product_number.clone(),
                    unit_price: pricing.unit_price,
                    available: variation.quantity_available,
                });
            }
        }
    }

    best
}
