use serde::{Deserialize, Serialize};

/// A flat heading record as produced by extraction, before or after level
/// normalization. `level` is always positive; a source line or block without a
/// parsable level is never emitted as a `Heading`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heading {
    pub title: String,
    pub slug: String,
    pub level: u32,
}

/// One node of the table-of-contents tree. `nodes` is `None` for a leaf, never
/// an empty vec.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TocNode {
    pub title: String,
    pub slug: String,
    pub level: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nodes: Option<Vec<TocNode>>,
}

impl From<&Heading> for TocNode {
    fn from(heading: &Heading) -> Self {
        Self {
            title: heading.title.clone(),
            slug: heading.slug.clone(),
            level: heading.level,
            nodes: None,
        }
    }
}

/// A pre-parsed CMS content block. Only blocks whose `style` names a heading
/// weight participate in extraction.
#[derive(Debug, Clone, Deserialize)]
pub struct ContentBlock {
    #[serde(default)]
    pub style: Option<String>,
    #[serde(default)]
    pub children: Option<Vec<ContentSpan>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContentSpan {
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TocManifest {
    pub manifest_version: u32,
    pub generated_at: String,
    pub source_path: String,
    pub source_format: String,
    pub source_sha256: String,
    pub heading_count: usize,
    pub valid: bool,
    pub toc: Vec<TocNode>,
}

#[derive(Debug, Clone, Serialize)]
pub struct HeadingListManifest {
    pub manifest_version: u32,
    pub generated_at: String,
    pub source_path: String,
    pub source_format: String,
    pub heading_count: usize,
    pub headings: Vec<Heading>,
}
