//! Parameter definitions with physical units and documented semantics.
//!
//! Every constant of the simulation lives here with:
//! - Physical units (meters, seconds, kg, etc.)
//! - The unit system it is expressed in (world units or SI)
//! - A `Default` carrying the values the demo runs with

mod environment;
mod platform;
mod render;
mod sim;
mod wave;

// Re-export all types
pub use environment::Environment;
pub use platform::PlatformConfig;
pub use render::RenderConfig;
pub use sim::SimConfig;
pub use wave::WaveConfig;
