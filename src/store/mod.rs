mod lobby;
mod sweep;

pub use lobby::*;
pub use sweep::*;
