pub mod encoder;
pub mod transcode;
pub mod types;

pub use encoder::*;
pub use transcode::*;
pub use types::*;
