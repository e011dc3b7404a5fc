use std::fs::File;
use std::io::{BufReader, ErrorKind, Read};
use std::path::Path;

use serde::Deserialize;
use tracing::debug;
use xml::reader::{EventReader, ParserConfig, XmlEvent};

use crate::error::ConvertError;

pub const BLOGML_NAMESPACE: &str = "http://www.blogml.com/2006/09/BlogML";

#[derive(Deserialize, Debug, Clone)]
#[serde(rename = "blog")]
pub struct BlogDocument {
    #[serde(rename = "categories")]
    pub categories: Option<CategoriesSection>,
    #[serde(rename = "posts")]
    pub posts: Option<PostsSection>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct CategoriesSection {
    #[serde(rename = "category", default)]
    pub categories: Vec<CategoryNode>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct CategoryNode {
    #[serde(rename = "id")]
    pub id: Option<String>,
    #[serde(rename = "title")]
    pub title: Option<TextNode>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct PostsSection {
    #[serde(rename = "post", default)]
    pub posts: Vec<PostNode>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct PostNode {
    #[serde(rename = "date-created")]
    pub date_created: Option<String>,
    #[serde(rename = "date-modified")]
    pub date_modified: Option<String>,
    #[serde(rename = "title")]
    pub title: Option<TextNode>,
    #[serde(rename = "content")]
    pub content: Option<TextNode>,
    #[serde(rename = "categories")]
    pub categories: Option<CategoryRefs>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct CategoryRefs {
    #[serde(rename = "category", default)]
    pub refs: Vec<CategoryRef>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct CategoryRef {
    #[serde(rename = "ref")]
    pub reference: Option<String>,
}

/// Character data of an element such as `<title type="text">`. CDATA is
/// folded into the text by the parser.
#[derive(Deserialize, Debug, Clone)]
pub struct TextNode {
    #[serde(rename = "$value", default)]
    pub text: String,
}

/// The two sections the converter needs, with their presence checked.
pub struct BlogSections {
    pub categories: CategoriesSection,
    pub posts: PostsSection,
}

impl BlogDocument {
    pub fn into_sections(self) -> Result<BlogSections, ConvertError> {
        let categories = self
            .categories
            .ok_or_else(|| ConvertError::schema("missing <categories> section"))?;
        let posts = self
            .posts
            .ok_or_else(|| ConvertError::schema("missing <posts> section"))?;
        Ok(BlogSections { categories, posts })
    }
}

pub fn parse_xml_file(path: &Path) -> Result<BlogSections, ConvertError> {
    let file = File::open(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => ConvertError::NotFound {
            path: path.to_path_buf(),
        },
        _ => ConvertError::Read {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let mut bytes = Vec::new();
    BufReader::new(file)
        .read_to_end(&mut bytes)
        .map_err(|source| ConvertError::Read {
            path: path.to_path_buf(),
            source,
        })?;
    debug!("Read {} bytes from {:?}", bytes.len(), path);

    parse_xml(&bytes)
}

pub fn parse_xml(xml: &[u8]) -> Result<BlogSections, ConvertError> {
    // Text is kept exactly as written, including padding inside CDATA.
    // Whitespace between elements still arrives as `Whitespace` events,
    // which the deserializer skips.
    let config = ParserConfig::new()
        .trim_whitespace(false)
        .cdata_to_characters(true)
        .coalesce_characters(true)
        .ignore_comments(true);
    let mut de = serde_xml_rs::Deserializer::new(EventReader::new_with_config(xml, config));
    let document =
        BlogDocument::deserialize(&mut de).map_err(|e| ConvertError::Parse(e.to_string()))?;

    check_namespace(xml)?;
    document.into_sections()
}

/// Sections are only looked up under the BlogML namespace, so a root element
/// outside it has neither `categories` nor `posts`.
fn check_namespace(xml: &[u8]) -> Result<(), ConvertError> {
    for event in EventReader::new(xml) {
        if let XmlEvent::StartElement { name, .. } =
            event.map_err(|e| ConvertError::Parse(e.to_string()))?
        {
            return match name.namespace.as_deref() {
                Some(BLOGML_NAMESPACE) => Ok(()),
                other => Err(ConvertError::Schema(format!(
                    "root element <{}> is in namespace {:?}, expected {BLOGML_NAMESPACE}",
                    name.local_name, other
                ))),
            };
        }
    }
    Err(ConvertError::schema("document has no root element"))
}
