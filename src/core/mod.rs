mod dtype;
mod error;
mod logger;

pub use dtype::{Repr, Semantics, TypeIndex};
pub use error::ColchunkError;
pub use logger::{init_test_logging, setup_logging};
