use crate::toc::HeadingLevel;
use crate::utils::error::BoxResult;

/// Handle the levels command
pub fn handle_levels_command() -> BoxResult<()> {
    for level in HeadingLevel::ALL {
        println!("{}", level);
    }
    Ok(())
}
