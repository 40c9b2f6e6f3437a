//! Command implementations

pub mod deploy;
pub mod list;
pub mod render;
pub mod render_all;
pub mod status;

pub use deploy::run_deploy;
pub use list::run_list;
pub use render::run_render;
pub use render_all::run_render_all;
pub use status::run_status;
