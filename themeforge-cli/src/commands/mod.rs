//! CLI command implementations

pub mod clean;
pub mod create;
pub mod path;
pub mod render;
pub mod scss;
pub mod watch;

pub use clean::CleanCommand;
pub use create::CreateCommand;
pub use path::PathCommand;
pub use render::RenderCommand;
pub use scss::ScssCommand;
pub use watch::WatchCommand;
