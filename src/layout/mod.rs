//! Grid/slider plans and the interactive controllers behind them.

pub(crate) mod carousel;
pub(crate) mod responsive;
pub(crate) mod rotation;
