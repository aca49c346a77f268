use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_yaml::Value;

use crate::toc::HeadingSelection;

/// How a document asks to be indexed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TocSetting {
    /// No `toc` key, or `toc: true`: fall back to the configured levels
    Inherit,
    /// `toc: false`
    Disabled,
    /// `toc: [h2, h3]` or `toc: "h2,h3"`
    Levels(HeadingSelection),
}

/// Front matter of a content document
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct FrontMatter {
    /// Document title
    #[serde(default)]
    pub title: Option<String>,

    /// Layout name, also used as the content type when `type` is absent
    #[serde(default)]
    pub layout: Option<String>,

    /// Content type such as `post` or `page`
    #[serde(default, rename = "type")]
    pub content_type: Option<String>,

    /// Heading levels to index for this document
    #[serde(default)]
    pub toc: Option<Value>,

    /// Any other keys
    #[serde(flatten)]
    pub custom: HashMap<String, Value>,
}

impl FrontMatter {
    /// The effective content type of the document
    pub fn kind(&self) -> Option<&str> {
        self.content_type.as_deref().or(self.layout.as_deref())
    }

    /// Interpret the `toc` key
    pub fn toc_setting(&self) -> TocSetting {
        match &self.toc {
            None | Some(Value::Null) | Some(Value::Bool(true)) => TocSetting::Inherit,
            Some(Value::Bool(false)) => TocSetting::Disabled,
            Some(Value::String(list)) => {
                TocSetting::Levels(HeadingSelection::from_tokens(list.split(',')))
            }
            Some(Value::Sequence(items)) => {
                let tokens = items.iter().filter_map(scalar_token);
                TocSetting::Levels(HeadingSelection::from_tokens(tokens))
            }
            Some(other) => {
                log::warn!("Unrecognised toc setting {:?}, using defaults", other);
                TocSetting::Inherit
            }
        }
    }
}

fn scalar_token(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
