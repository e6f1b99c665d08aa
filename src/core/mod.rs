pub mod budget;
pub mod filter;
pub mod item;
pub mod theme;
