// body/mod.rs
// Re-exports for the body module

mod central;
mod types;

pub use central::CentralCharge;
pub use types::*;

#[cfg(test)]
mod tests;
