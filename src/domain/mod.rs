pub mod content;
pub mod map_data;
pub mod tiles;
