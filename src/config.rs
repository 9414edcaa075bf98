// src/config.rs
use crate::order::PRICE_DP;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

pub const DEFAULT_OUTPUT: &str = "data/generated_orders.txt";
pub const DEFAULT_SEED: u64 = 42;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Count must be positive (got {0})")]
    NonPositiveCount(i64),
    #[error("min_price must be less than max_price ({min} >= {max})")]
    InvalidPriceRange { min: Decimal, max: Decimal },
    #[error("min_qty must be less than max_qty ({min} >= {max})")]
    InvalidQtyRange { min: i64, max: i64 },
    #[error("price range [{min}, {max}) contains no 2-decimal price")]
    EmptyPriceGrid { min: Decimal, max: Decimal },
    #[error("price range [{min}, {max}) is too large to express in cents")]
    PriceOutOfRange { min: Decimal, max: Decimal },
}

/// Parse a price given as plain decimal (`150.25`) or scientific notation (`1.5e2`).
pub fn parse_price(s: &str) -> Result<Decimal, String> {
    let s = s.trim();
    Decimal::from_str(s)
        .or_else(|_| Decimal::from_scientific(s))
        .map_err(|e| format!("invalid price '{}': {}", s, e))
}

/// Half-open price range `[min, max)` expressed in cent ticks.
///
/// The lower tick is `ceil(min * 100)` and the upper tick is `ceil(max * 100)`,
/// so every tick in `lo..hi` renders to a price `p` with `min <= p < max`.
pub fn price_ticks(min: Decimal, max: Decimal) -> Result<(i128, i128), ConfigError> {
    if min >= max {
        return Err(ConfigError::InvalidPriceRange { min, max });
    }
    let scale = Decimal::from(10_i64.pow(PRICE_DP));
    let to_tick = |d: Decimal| d.checked_mul(scale).and_then(|v| v.ceil().to_i128());
    match (to_tick(min), to_tick(max)) {
        (Some(lo), Some(hi)) if lo < hi => Ok((lo, hi)),
        (Some(_), Some(_)) => Err(ConfigError::EmptyPriceGrid { min, max }),
        _ => Err(ConfigError::PriceOutOfRange { min, max }),
    }
}

/// Everything one generation run needs, as given on the command line.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    pub count: i64,
    pub output: PathBuf,
    pub min_price: Decimal,
    pub max_price: Decimal,
    pub min_qty: i64,
    pub max_qty: i64,
    pub include_header: bool,
    pub seed: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            count: 1,
            output: PathBuf::from(DEFAULT_OUTPUT),
            min_price: Decimal::new(100, 0),
            max_price: Decimal::new(200, 0),
            min_qty: 1,
            max_qty: 1000,
            include_header: true,
            seed: DEFAULT_SEED,
        }
    }
}

impl GeneratorConfig {
    /// Checks run before any generation work. Order of checks is count,
    /// price range, quantity range, then the cent grid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.count <= 0 {
            return Err(ConfigError::NonPositiveCount(self.count));
        }
        if self.min_price >= self.max_price {
            return Err(ConfigError::InvalidPriceRange {
                min: self.min_price,
                max: self.max_price,
            });
        }
        if self.min_qty >= self.max_qty {
            return Err(ConfigError::InvalidQtyRange {
                min: self.min_qty,
                max: self.max_qty,
            });
        }
        price_ticks(self.min_price, self.max_price)?;
        Ok(())
    }

    /// Validated count as an unsigned record total.
    pub fn record_count(&self) -> Result<u64, ConfigError> {
        u64::try_from(self.count)
            .ok()
            .filter(|c| *c > 0)
            .ok_or(ConfigError::NonPositiveCount(self.count))
    }
}
