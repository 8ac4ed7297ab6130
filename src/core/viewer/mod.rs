pub mod display_utils;
pub mod table_display;
pub mod terminal;
