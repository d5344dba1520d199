//! Parse a textual description of nested two-pan balance scales and
//! compute, for every scale, the extra mass its lighter pan needs so the
//! whole tree balances bottom-up.
//!
//! Pipeline: raw lines -> [`parser::parse_reader`] (validated
//! [`model::ScaleTree`]) -> [`balance::balance`] (per-scale
//! [`model::BalanceMasses`]) -> CLI formatting.

pub mod balance;
pub mod cli;
pub mod display;
pub mod errors;
pub mod exitcode;
pub mod model;
pub mod parser;
pub mod util;

pub use balance::balance;
pub use errors::{ScaleError, ScaleResult};
pub use model::{BalanceMasses, BalanceReport, Mass, Pan, Scale, ScaleName, ScaleTree};
pub use parser::{parse_file, parse_reader};
