pub mod filters;
pub mod scheduler;
pub mod screen;
pub mod strip;
pub mod suggest;
