pub mod aspect;
pub mod video;

pub use aspect::AspectClass;
pub use video::{Video, VideoResponse};
