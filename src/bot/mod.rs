mod model;
mod opponent;

pub use model::*;
pub use opponent::*;
