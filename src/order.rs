// src/order.rs
use rust_decimal::Decimal;

/// Prices are kept on a cent grid.
pub const PRICE_DP: u32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Buy,
    Sell,
}

impl Side {
    /// Wire code used in the delimited file: 0 = buy, 1 = sell.
    pub fn code(self) -> u8 {
        match self {
            Side::Buy => 0,
            Side::Sell => 1,
        }
    }

    pub fn from_code(code: u8) -> Option<Side> {
        match code {
            0 => Some(Side::Buy),
            1 => Some(Side::Sell),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub id: u64,
    pub price: Decimal,
    pub quantity: i64,
    pub side: Side,
}

impl Order {
    pub fn new(id: u64, price: Decimal, quantity: i64, side: Side) -> Self {
        Order {
            id,
            price,
            quantity,
            side,
        }
    }

    pub fn is_buy(&self) -> bool {
        self.side == Side::Buy
    }

    pub fn is_sell(&self) -> bool {
        self.side == Side::Sell
    }
}
