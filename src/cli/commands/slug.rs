use crate::toc::generate_slug;
use crate::utils::error::BoxResult;

/// Handle the slug command
pub fn handle_slug_command(text: &str, namespace: &str) -> BoxResult<()> {
    println!("{}", generate_slug(text, namespace));
    Ok(())
}
