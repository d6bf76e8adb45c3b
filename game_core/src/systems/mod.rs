pub mod collision;
pub mod gc;
pub mod input;
pub mod movement;
pub mod pickups;
pub mod pipes;
pub mod scoring;

pub use collision::*;
pub use gc::*;
pub use input::*;
pub use movement::*;
pub use pickups::*;
pub use pipes::*;
pub use scoring::*;
