// src/stats.rs
use crate::order::{Order, Side};
use rust_decimal::Decimal;
use std::fmt;

/// Aggregate figures printed after a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    pub count: usize,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    pub min_qty: Option<i64>,
    pub max_qty: Option<i64>,
    pub buys: usize,
    pub sells: usize,
}

pub fn summarize(orders: &[Order]) -> Summary {
    orders.iter().fold(Summary::default(), |mut s, o| {
        s.count += 1;
        s.min_price = Some(s.min_price.map_or(o.price, |p| p.min(o.price)));
        s.max_price = Some(s.max_price.map_or(o.price, |p| p.max(o.price)));
        s.min_qty = Some(s.min_qty.map_or(o.quantity, |q| q.min(o.quantity)));
        s.max_qty = Some(s.max_qty.map_or(o.quantity, |q| q.max(o.quantity)));
        match o.side {
            Side::Buy => s.buys += 1,
            Side::Sell => s.sells += 1,
        }
        s
    })
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let (Some(lo), Some(hi)) = (self.min_price, self.max_price) {
            writeln!(f, "Price range: {:.2} - {:.2}", lo, hi)?;
        }
        if let (Some(lo), Some(hi)) = (self.min_qty, self.max_qty) {
            writeln!(f, "Quantity range: {} - {}", lo, hi)?;
        }
        writeln!(f, "Buy orders: {}", self.buys)?;
        write!(f, "Sell orders: {}", self.sells)
    }
}
