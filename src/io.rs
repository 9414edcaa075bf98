// src/io.rs
use crate::order::{Order, PRICE_DP, Side};
use csv::StringRecord;
use rust_decimal::Decimal;
use serde::Serialize;
use std::path::Path;
use thiserror::Error;
use tracing::info;

pub const HEADER: [&str; 4] = ["id", "price", "quantity", "side"];

#[derive(Debug, Error)]
pub enum WriteError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("parse error: {0}")]
    Parse(String),
}

/// One output row. Price is pre-rendered so the file always carries two decimals.
#[derive(Debug, Serialize)]
struct OrderRow {
    id: u64,
    price: String,
    quantity: i64,
    side: u8,
}

impl From<&Order> for OrderRow {
    fn from(o: &Order) -> Self {
        OrderRow {
            id: o.id,
            price: format!("{:.*}", PRICE_DP as usize, o.price),
            quantity: o.quantity,
            side: o.side.code(),
        }
    }
}

/// Write `orders` as `id,price,quantity,side` rows, creating or truncating `path`.
///
/// The parent directory is not created. On error the file may be left
/// truncated or partially written.
pub fn write_orders<P: AsRef<Path>>(
    path: P,
    orders: &[Order],
    include_header: bool,
) -> Result<(), WriteError> {
    let p = path.as_ref();
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_path(p)?;

    if include_header {
        wtr.write_record(HEADER)?;
    }
    for o in orders {
        wtr.serialize(OrderRow::from(o))?;
    }
    wtr.flush()?;

    info!(path = %p.display(), rows = orders.len(), include_header, "orders written");
    Ok(())
}

/// Read back a file in the `write_orders` format.
///
/// A first line mentioning `id` is taken as a header; blank lines are skipped.
pub fn load_orders<P: AsRef<Path>>(path: P) -> Result<Vec<Order>, LoadError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .trim(csv::Trim::All)
        .from_path(path.as_ref())?;

    let mut res = Vec::new();
    for (idx, result) in rdr.records().enumerate() {
        let record = result?;
        if idx == 0 && is_header(&record) {
            continue;
        }
        res.push(parse_csv_record(&record)?);
    }
    Ok(res)
}

fn is_header(rec: &StringRecord) -> bool {
    rec.iter().any(|f| f.to_ascii_lowercase().contains("id"))
}

fn parse_csv_record(rec: &StringRecord) -> Result<Order, LoadError> {
    let line = rec.position().map(|p| p.line()).unwrap_or(0);
    let field = |i: usize, name: &str| {
        rec.get(i)
            .ok_or_else(|| LoadError::Parse(format!("line {}: missing {}", line, name)))
    };

    let id = field(0, "id")?;
    let id: u64 = id
        .parse()
        .map_err(|_| LoadError::Parse(format!("line {}: invalid id '{}'", line, id)))?;
    let price = Decimal::from_str_exact(field(1, "price")?)
        .map_err(|e| LoadError::Parse(format!("line {}: invalid price: {}", line, e)))?;
    let quantity = field(2, "quantity")?;
    let quantity: i64 = quantity.parse().map_err(|_| {
        LoadError::Parse(format!("line {}: invalid quantity '{}'", line, quantity))
    })?;
    let side_s = field(3, "side")?;
    let side = side_s
        .parse::<u8>()
        .ok()
        .and_then(Side::from_code)
        .ok_or_else(|| LoadError::Parse(format!("line {}: invalid side '{}'", line, side_s)))?;

    Ok(Order::new(id, price, quantity, side))
}
