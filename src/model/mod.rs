pub mod bonds;
pub mod colors;
pub mod table;
