mod component;
mod forces;
mod nodes;
mod params;
mod render;
mod state;
mod types;

pub use component::SkillGraphCanvas;
pub use types::SkillNode;
