pub mod camera;
pub mod constants;
pub mod cull;
pub mod engine;
pub mod feed;
pub mod layout;
pub mod seed;
pub mod wrap;

pub use camera::*;
pub use constants::*;
pub use cull::*;
pub use engine::*;
pub use feed::*;
pub use layout::*;
pub use seed::*;
pub use wrap::*;
