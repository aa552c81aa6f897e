pub mod catalog;
pub mod interaction;
pub mod layout;
pub mod orrery;
pub mod simulation;

pub use hit_test::Hit;
pub use interaction::{InteractionState, Mode, SpeedSlider};
pub use layout::{Layout, Placement};
pub use orrery::Orrery;
pub use simulation::{Flow, InputEvent, PointerButton, SimulationState};
