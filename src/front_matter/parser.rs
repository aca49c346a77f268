use log::warn;

use crate::front_matter::types::FrontMatter;
use crate::utils::error::IndexError;

const DELIMITER: &str = "---";

/// Locate a front matter block.
///
/// Returns the YAML text and the byte offset where the body starts, or
/// `None` when the document does not open with a `---` line closed by
/// another `---` line.
fn locate(content: &str) -> Option<(&str, usize)> {
    let first_line_end = content.find('\n')?;
    if content[..first_line_end].trim_end() != DELIMITER {
        return None;
    }

    let yaml_start = first_line_end + 1;
    let mut offset = yaml_start;
    for line in content[yaml_start..].split_inclusive('\n') {
        if line.trim_end() == DELIMITER {
            return Some((&content[yaml_start..offset], offset + line.len()));
        }
        offset += line.len();
    }

    None
}

/// Check if content has front matter
pub fn has_front_matter(content: &str) -> bool {
    locate(content).is_some()
}

/// Parse front matter strictly, failing on invalid YAML
pub fn parse(content: &str) -> Result<(FrontMatter, &str), IndexError> {
    match locate(content) {
        Some((yaml, body_start)) => {
            let front_matter = if yaml.trim().is_empty() {
                FrontMatter::default()
            } else {
                serde_yaml::from_str(yaml)
                    .map_err(|e| IndexError::FrontMatter(e.to_string()))?
            };
            Ok((front_matter, &content[body_start..]))
        }
        None => Ok((FrontMatter::default(), content)),
    }
}

/// Split a document into front matter and body.
///
/// Invalid YAML is reported and treated as empty front matter; the block is
/// still removed from the body.
pub fn split(content: &str) -> (FrontMatter, &str) {
    match parse(content) {
        Ok(parts) => parts,
        Err(e) => {
            warn!("Error parsing front matter: {}", e);
            let body = locate(content).map_or(content, |(_, start)| &content[start..]);
            (FrontMatter::default(), body)
        }
    }
}
