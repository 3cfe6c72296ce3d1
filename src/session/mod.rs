mod state;
mod stats;

pub use state::*;
pub use stats::*;
