pub mod bot;
pub mod dto;
pub mod error;
pub mod game;
pub mod hosting;
pub mod session;
pub mod store;

/// Evidence weight behind a prediction, in [0, 1].
pub type Confidence = f64;

/// Initializes the process-wide logger from RUST_LOG, defaulting to info.
pub fn log() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}
