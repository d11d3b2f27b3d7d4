pub mod chain;
pub mod geometry;
pub mod scene;
