mod build;
mod levels;
mod slug;
mod transform;

pub use self::build::handle_build_command;
pub use self::levels::handle_levels_command;
pub use self::slug::handle_slug_command;
pub use self::transform::handle_transform_command;
