//! cellpad_engine - Grid store, A1 addressing and `SUM` formulas.

pub mod engine;
