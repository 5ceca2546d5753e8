pub mod brain;
pub mod initiatives;
pub mod records;
pub mod stats;
