//! Decorative force-directed network drawn on a canvas.

mod component;
mod data;
mod render;
mod state;
mod types;

pub use component::NetworkScene;
pub use data::{random_tree, skill_constellation};
pub use types::{SceneGraph, SceneNode, SceneTheme};
