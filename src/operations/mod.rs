pub mod file_ops;
pub mod validation;

pub use file_ops::load_dataset;
pub use validation::parse_command;
