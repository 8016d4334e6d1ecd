//! Domain types shared across the calculators.

mod compounding;
mod value_kind;

pub use compounding::Compounding;
pub use value_kind::ValueKind;
