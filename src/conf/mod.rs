mod chunk;
mod config;

pub use chunk::{ChunkConfig, NumberFormat};
pub use config::Config;
