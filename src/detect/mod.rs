pub mod summary;
pub mod windows;

pub use windows::{detect_windows, SuspiciousWindow, WindowKey, DEFAULT_THRESHOLD};
