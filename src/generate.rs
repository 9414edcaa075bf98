// src/generate.rs
use crate::config::{ConfigError, GeneratorConfig, price_ticks};
use crate::order::{Order, PRICE_DP, Side};
use rand::{Rng, SeedableRng, rngs::StdRng};
use rust_decimal::Decimal;
use tracing::debug;

/// Generate `count` orders from a `StdRng` seeded with `seed`.
///
/// Same arguments, same output: ids run `1..=count`, price is drawn from
/// `[price_range.0, price_range.1)` on the cent grid, quantity from the
/// inclusive `qty_range`, side is a fair coin.
pub fn generate(
    count: u64,
    price_range: (Decimal, Decimal),
    qty_range: (i64, i64),
    seed: u64,
) -> Result<Vec<Order>, ConfigError> {
    let mut rng = StdRng::seed_from_u64(seed);
    generate_with_rng(&mut rng, count, price_range, qty_range)
}

pub fn generate_with_rng<R: Rng + ?Sized>(
    rng: &mut R,
    count: u64,
    price_range: (Decimal, Decimal),
    qty_range: (i64, i64),
) -> Result<Vec<Order>, ConfigError> {
    let (lo, hi) = price_ticks(price_range.0, price_range.1)?;
    let (min_qty, max_qty) = qty_range;
    // a single-point quantity range is fine here; only the CLI insists on min < max
    if min_qty > max_qty {
        return Err(ConfigError::InvalidQtyRange {
            min: min_qty,
            max: max_qty,
        });
    }
    debug!(count, %lo, %hi, min_qty, max_qty, "generating orders");

    let mut out = Vec::with_capacity(usize::try_from(count).unwrap_or(0));
    for id in 1..=count {
        let price = Decimal::try_from_i128_with_scale(rng.gen_range(lo..hi), PRICE_DP)
            .map_err(|_| ConfigError::PriceOutOfRange {
                min: price_range.0,
                max: price_range.1,
            })?;
        let quantity = rng.gen_range(min_qty..=max_qty);
        let side = if rng.gen_bool(0.5) {
            Side::Sell
        } else {
            Side::Buy
        };
        out.push(Order::new(id, price, quantity, side));
    }
    Ok(out)
}

/// Generate from a validated CLI configuration.
pub fn generate_from_config(cfg: &GeneratorConfig) -> Result<Vec<Order>, ConfigError> {
    cfg.validate()?;
    generate(
        cfg.record_count()?,
        (cfg.min_price, cfg.max_price),
        (cfg.min_qty, cfg.max_qty),
        cfg.seed,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn d(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn deterministic_for_fixed_seed() {
        let a = generate(500, (d("100"), d("200")), (1, 1000), 42).unwrap();
        let b = generate(500, (d("100"), d("200")), (1, 1000), 42).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn different_seed_changes_output() {
        let a = generate(200, (d("100"), d("200")), (1, 1000), 42).unwrap();
        let b = generate(200, (d("100"), d("200")), (1, 1000), 43).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn ids_are_sequential_from_one() {
        let orders = generate(1000, (d("100"), d("200")), (1, 1000), 7).unwrap();
        assert_eq!(orders.len(), 1000);
        for (i, o) in orders.iter().enumerate() {
            assert_eq!(o.id, i as u64 + 1);
        }
    }

    #[test]
    fn fields_stay_in_range() {
        let (min_p, max_p) = (d("10.5"), d("10.75"));
        let orders = generate(5000, (min_p, max_p), (-3, 3), 1).unwrap();
        for o in &orders {
            assert!(o.price >= min_p && o.price < max_p, "price {}", o.price);
            assert_eq!(o.price.scale(), 2);
            assert!((-3..=3).contains(&o.quantity));
        }
        // both ends of the inclusive quantity range get hit
        assert!(orders.iter().any(|o| o.quantity == -3));
        assert!(orders.iter().any(|o| o.quantity == 3));
    }

    #[test]
    fn sides_roughly_balanced() {
        let orders = generate(100_000, (d("100"), d("200")), (1, 1000), 42).unwrap();
        let buys = orders.iter().filter(|o| o.is_buy()).count();
        let sells = orders.len() - buys;
        // std dev is ~158 for n = 100k, allow 5 sigma
        assert!((49_200..=50_800).contains(&buys), "buys = {}", buys);
        assert!((49_200..=50_800).contains(&sells), "sells = {}", sells);
    }

    #[test]
    fn single_record() {
        let orders = generate(1, (d("100"), d("200")), (1, 1000), 42).unwrap();
        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].id, 1);
    }

    #[test]
    fn three_orders_unit_quantity() {
        let orders = generate(3, (d("100.0"), d("101.0")), (1, 1), 42).unwrap();
        assert_eq!(orders.iter().map(|o| o.id).collect::<Vec<_>>(), [1, 2, 3]);
        for o in &orders {
            assert!(o.price >= d("100.00") && o.price < d("101.00"));
            assert_eq!(o.quantity, 1);
        }
        let again = generate(3, (d("100.0"), d("101.0")), (1, 1), 42).unwrap();
        let sides: Vec<Side> = orders.iter().map(|o| o.side).collect();
        let sides_again: Vec<Side> = again.iter().map(|o| o.side).collect();
        assert_eq!(sides, sides_again);
    }

    #[test]
    fn huge_price_range_draws_cents() {
        let (min_p, max_p) = (d("100"), d("100000000000000000000"));
        let orders = generate(200, (min_p, max_p), (1, 10), 42).unwrap();
        for o in &orders {
            assert!(o.price >= min_p && o.price < max_p, "price {}", o.price);
            assert_eq!(o.price.scale(), 2);
        }
        // a range this wide almost never lands near the bottom
        assert!(orders.iter().any(|o| o.price > d("1000000000000")));
    }

    #[test]
    fn rejects_inverted_qty_range() {
        let err = generate(3, (d("100"), d("101")), (5, 1), 42).unwrap_err();
        assert_eq!(err, ConfigError::InvalidQtyRange { min: 5, max: 1 });
    }

    #[test]
    fn rejects_bad_price_range() {
        assert!(generate(3, (d("101"), d("100")), (1, 2), 42).is_err());
        assert!(generate(3, (d("1.001"), d("1.002")), (1, 2), 42).is_err());
    }

    #[test]
    fn from_config_validates_first() {
        let cfg = GeneratorConfig {
            count: 0,
            ..GeneratorConfig::default()
        };
        assert_eq!(
            generate_from_config(&cfg),
            Err(ConfigError::NonPositiveCount(0))
        );

        let ok = GeneratorConfig {
            count: 25,
            ..GeneratorConfig::default()
        };
        assert_eq!(generate_from_config(&ok).unwrap().len(), 25);
    }

    #[test]
    fn custom_rng_is_used() {
        let mut rng = StdRng::seed_from_u64(9);
        let x = generate_with_rng(&mut rng, 10, (d("1"), d("2")), (1, 9)).unwrap();
        let y = generate(10, (d("1"), d("2")), (1, 9), 9).unwrap();
        assert_eq!(x, y);
        // the rng keeps advancing across calls
        let z = generate_with_rng(&mut rng, 10, (d("1"), d("2")), (1, 9)).unwrap();
        assert_ne!(x, z);
    }
}
