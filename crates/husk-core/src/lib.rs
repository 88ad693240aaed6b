pub mod error;
pub mod types;

pub use error::{HuskError, HuskResult};
pub use types::{FrameOptions, Secrets};
