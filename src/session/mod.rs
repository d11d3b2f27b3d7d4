pub mod live;
pub mod player;
pub mod script;
