//! Video metadata model: probing, per-file handles, and the ordered
//! collection the planner works from.

pub mod collection;
pub mod probe;
pub mod video;

pub use collection::VideoCollection;
pub use probe::{VideoInfo, probe_video};
pub use video::Video;
