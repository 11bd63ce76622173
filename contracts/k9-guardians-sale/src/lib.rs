pub mod contract;
pub mod error;
pub mod execute;
pub mod msg;
pub mod pricing;
pub mod query;
pub mod state;

#[cfg(test)]
pub mod testing;
