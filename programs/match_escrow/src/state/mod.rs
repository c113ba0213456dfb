pub mod match_pool;

pub use match_pool::*;
