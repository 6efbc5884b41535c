//! Measurement normalization: fractions, rounding and size resolution.

mod fraction;
mod resolver;
mod rounding;
mod transom;

pub use fraction::{combine, sanitize_whole, split};
pub use resolver::{floor_then_min, resolve, resolve_detailed, resolve_simple, Resolution};
pub use rounding::{format_as_fraction, format_inches, format_size, round_down_to_eighth};
pub use transom::{resolve_transom, TransomInput};
