mod site;
mod types;

pub use site::build_site;
pub use types::BuildReport;
