pub mod contexts;
pub mod events;
pub mod instructions;
pub mod params;

pub use contexts::*;
pub use events::*;
pub use instructions::*;
pub use params::*;
