mod greeting;
pub use crate::greeting::*;
