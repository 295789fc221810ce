pub mod contexts;
pub mod events;
pub mod instructions;

pub use contexts::*;
pub use events::*;
pub use instructions::*;
