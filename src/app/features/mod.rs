pub mod filter;
pub mod screen;
pub mod typing;
pub mod ui;
