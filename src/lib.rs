pub mod error;
pub mod math;
pub mod mesh;
pub mod operations;
pub mod solid;

pub use error::{ArbmeshError, Result};
