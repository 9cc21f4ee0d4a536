pub mod bootstrap;
pub mod models;
pub mod pool;
pub mod seed;
