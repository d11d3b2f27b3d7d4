pub mod consts;
pub mod core;
pub mod error;
