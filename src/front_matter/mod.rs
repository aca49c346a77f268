pub mod parser;
pub mod types;

pub use parser::{has_front_matter, parse, split};
pub use types::{FrontMatter, TocSetting};
