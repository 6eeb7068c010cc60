pub mod driver;
pub mod sorting;
