pub mod segment;
pub mod sort;
