pub mod controller;
pub mod scheduler;

pub use controller::MotionController;
pub use scheduler::{FrameHandle, FrameScheduler};
