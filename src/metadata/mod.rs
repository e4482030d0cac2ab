pub mod data;
pub mod errors;
pub mod parser;

pub use data::*;
pub use errors::*;
pub use parser::*;

pub use crate::config::parser::load_metadata_json;
