pub mod apply;
pub mod exists;
pub mod render;

pub use apply::cmd_apply;
pub use exists::cmd_exists;
pub use render::{RenderFormat, cmd_render, render_output};
