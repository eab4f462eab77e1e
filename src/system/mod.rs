pub mod collector;
pub mod gpu;
pub mod history;
pub mod process;
pub mod rates;
pub mod sampler;
pub mod snapshot;
pub mod store;
