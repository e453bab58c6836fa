pub mod access_window;
pub mod availability;
pub mod legacy_window;
