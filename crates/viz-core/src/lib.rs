pub mod app;
pub mod clock;
pub mod constants;
pub mod decay;
pub mod error;
pub mod interaction;
pub mod layout;
pub mod params;
pub mod presets;
#[cfg(feature = "gpu")]
pub mod render;
pub mod shortcuts;
pub mod signal;
pub mod uniforms;
pub mod variant;

pub static QUAD_WGSL: &str = include_str!("../shaders/quad.wgsl");
pub static FLOW_WGSL: &str = include_str!("../shaders/flow.wgsl");
pub static GEOMETRIC_WGSL: &str = include_str!("../shaders/geometric.wgsl");

pub use app::*;
pub use clock::*;
pub use decay::*;
pub use error::*;
pub use interaction::*;
pub use layout::*;
pub use params::*;
pub use presets::*;
#[cfg(feature = "gpu")]
pub use render::*;
pub use shortcuts::*;
pub use signal::*;
pub use uniforms::*;
pub use variant::*;
