pub mod constants;
pub mod director;
pub mod math;
pub mod mesh;
pub mod overlay;
pub mod projector;
pub mod scene;
pub mod scroll;
pub mod state;

pub use constants::*;
pub use director::*;
pub use math::*;
pub use mesh::*;
pub use overlay::*;
pub use projector::*;
pub use scene::*;
pub use scroll::*;
pub use state::*;

// Shaders bundled as string constants
pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");
pub static FX_WGSL: &str = include_str!("../shaders/fx.wgsl");
