mod column;
mod dictionary;
mod number;
mod widening;

pub use column::{ChunkSummary, ColumnChunk};
pub use dictionary::Dictionary;
pub use number::{Element, Number};
pub use widening::{Chain, CodeChain, CodeVec, Lanes, NumericChain, NumericVec, WideningVec};
