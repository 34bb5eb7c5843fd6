//! "Set all" helpers of the stock step

use super::clone_draft::CloneStock;
use crate::shared::config::MAX_PRODUCT_QUANTITY;
use rand::Rng;

/// Length of a generated SKU
pub const SKU_LENGTH: usize = 6;

/// Value applied to every stock row at once
#[derive(Debug, Clone, PartialEq)]
pub enum StockPatch {
    Sku(String),
    Quantity(i64),
    Price(f64),
}

/// Apply `patch` to every row. Quantities are clamped to
/// `0..=MAX_PRODUCT_QUANTITY`, negative prices become zero.
pub fn assign_all(stocks: &mut [CloneStock], patch: &StockPatch) {
    for stock in stocks.iter_mut() {
        match patch {
            StockPatch::Sku(sku) => stock.sku = Some(sku.clone()),
            StockPatch::Quantity(q) => stock.quantity = clamp_quantity(*q),
            StockPatch::Price(p) => stock.price = if p.is_finite() { p.max(0.0) } else { 0.0 },
        }
    }
}

pub fn clamp_quantity(value: i64) -> i64 {
    value.clamp(0, MAX_PRODUCT_QUANTITY)
}

/// Random numeric SKU of `len` digits without a leading zero
pub fn generate_sku<R: Rng>(rng: &mut R, len: usize) -> String {
    (0..len)
        .map(|i| {
            let digit = if i == 0 { rng.gen_range(1..=9) } else { rng.gen_range(0..=9) };
            char::from(b'0' + digit as u8)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rows() -> Vec<CloneStock> {
        (1..=3)
            .map(|id| CloneStock {
                id,
                sku: None,
                price: 1.0,
                quantity: 1,
                extra_ids: vec![],
            })
            .collect()
    }

    #[test]
    fn test_assign_all() {
        let mut stocks = rows();
        assign_all(&mut stocks, &StockPatch::Sku("ABC".into()));
        assign_all(&mut stocks, &StockPatch::Price(9.5));
        assert!(stocks.iter().all(|s| s.sku.as_deref() == Some("ABC") && s.price == 9.5));

        assign_all(&mut stocks, &StockPatch::Quantity(-4));
        assert!(stocks.iter().all(|s| s.quantity == 0));
        assign_all(&mut stocks, &StockPatch::Quantity(i64::MAX));
        assert!(stocks.iter().all(|s| s.quantity == MAX_PRODUCT_QUANTITY));
    }

    #[test]
    fn test_generate_sku() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let sku = generate_sku(&mut rng, SKU_LENGTH);
            assert_eq!(sku.len(), SKU_LENGTH);
            assert!(sku.chars().all(|c| c.is_ascii_digit()));
            assert!(!sku.starts_with('0'));
        }
    }
}
