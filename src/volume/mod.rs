pub mod calc;
pub mod units;
