//! `finish` subcommands.

mod calc;
mod check;
mod presets;

pub use calc::Calc;
pub use check::Check;
pub use presets::Presets;
