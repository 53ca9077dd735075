pub mod descriptor;

pub use descriptor::{simple_name, to_class_name};
