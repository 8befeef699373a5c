pub mod file_system;
pub mod frame_timer;
pub mod time_throttled_logger;
