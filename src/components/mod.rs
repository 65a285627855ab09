pub mod chips;
pub mod dropdown;
pub mod filter_bar;
pub mod filter_chooser;
pub mod footer;
pub mod header;
pub mod results;
pub mod search_box;
pub mod suggestions;
