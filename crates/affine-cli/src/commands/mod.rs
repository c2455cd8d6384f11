pub mod config;
pub mod encrypt;
pub mod inverse;
pub mod misc;
pub mod solve;
