#![forbid(unsafe_code)]
// Public library root

pub mod config;
pub mod generate;
pub mod io;
pub mod order;
pub mod stats;

pub use config::{ConfigError, GeneratorConfig};
pub use generate::{generate, generate_from_config, generate_with_rng};
pub use io::{LoadError, WriteError, load_orders, write_orders};
pub use order::{Order, Side};
pub use stats::{Summary, summarize};
