pub mod confetti;
pub mod dodge;

pub use confetti::*;
pub use dodge::*;
