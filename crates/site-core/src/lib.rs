pub mod butterfly;
pub mod carousel;
pub mod confetti;
pub mod constants;
pub mod motion;
pub mod rsvp;
pub mod state;

pub use butterfly::*;
pub use carousel::*;
pub use confetti::*;
pub use constants::*;
pub use motion::*;
pub use rsvp::*;
pub use state::*;
