pub mod export;
pub mod play;
