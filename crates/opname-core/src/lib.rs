//! opname core: fetch the WebAssembly SIMD implementation-status document,
//! pull the operator token out of each line and derive the runtime's
//! operator name for it.

pub mod checksum;
pub mod config;
pub mod driver;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod logging;
