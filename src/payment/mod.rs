// x402 payment gate (header check + 402 descriptors)

pub mod x402;

pub use x402::*;
