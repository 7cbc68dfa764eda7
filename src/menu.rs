//! The contextual menu itself: a prebuilt scene, the show/hide state
//! machine, and the per-frame egui presentation.

pub mod build;
pub mod controller;
mod present;

pub use build::{ClosePlacement, MenuScene, SceneEntry};
pub use controller::MenuController;
