pub mod blast;
pub mod movement;
pub mod rules;
pub mod render;

pub use blast::*;
pub use movement::*;
pub use rules::*;
pub use render::*;
