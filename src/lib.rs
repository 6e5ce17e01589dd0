pub mod chunk;
pub mod conf;
pub mod core;

#[cfg(feature = "testutil")]
pub mod testutil;
