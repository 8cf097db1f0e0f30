pub mod events;
pub mod sponsors;

pub use events::*;
pub use sponsors::*;
