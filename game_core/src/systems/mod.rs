pub mod collision;
pub mod facing;
pub mod hazards;
pub mod input;
pub mod movement;
pub mod platforms;
pub mod scoring;

pub use collision::*;
pub use facing::*;
pub use hazards::*;
pub use input::*;
pub use movement::*;
pub use platforms::*;
pub use scoring::*;
