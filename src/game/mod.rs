mod choice;
mod difficulty;
mod outcome;
mod round;

pub use choice::*;
pub use difficulty::*;
pub use outcome::*;
pub use round::*;
