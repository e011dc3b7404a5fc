use serde::Serialize;
use uuid::Uuid;

use crate::{
    error::ConvertError,
    model::{Blog, Category, Post, PostTagLink},
};

pub const EXPORT_VERSION: &str = "004";

/// Top level of a Ghost import file.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct GhostExport {
    pub meta: ExportMeta,
    pub data: ExportData,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ExportMeta {
    pub exported_on: i64,
    pub version: &'static str,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ExportData {
    pub posts: Vec<PostRecord>,
    pub tags: Vec<TagRecord>,
    pub posts_tags: Vec<PostTagRecord>,
}

// Field order is the key order of the emitted JSON. The `Option` fields are
// always `None` and must serialize as `null`, so none of them may be skipped.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct PostRecord {
    pub id: usize,
    pub uuid: Uuid,
    pub title: String,
    pub slug: String,
    pub markdown: String,
    pub html: String,
    pub image: Option<String>,
    pub featured: u8,
    pub page: u8,
    pub status: &'static str,
    pub language: &'static str,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub author_id: u32,
    pub created_at: i64,
    pub created_by: u32,
    pub updated_at: i64,
    pub updated_by: u32,
    pub published_at: i64,
    pub published_by: u32,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct TagRecord {
    pub id: usize,
    pub name: String,
    pub slug: String,
    pub description: String,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct PostTagRecord {
    pub post_id: usize,
    pub tag_id: usize,
}

impl From<&Post> for PostRecord {
    fn from(post: &Post) -> Self {
        Self {
            id: post.id,
            uuid: post.uuid,
            title: post.title.clone(),
            slug: post.slug.clone(),
            markdown: post.body.clone(),
            html: post.body.clone(),
            image: None,
            featured: Post::FEATURED,
            page: Post::PAGE,
            status: Post::STATUS,
            language: Post::LANGUAGE,
            meta_title: None,
            meta_description: None,
            author_id: Post::AUTHOR_ID,
            created_at: post.created_at,
            created_by: Post::CREATED_BY,
            updated_at: post.updated_at,
            updated_by: Post::UPDATED_BY,
            published_at: post.published_at,
            published_by: Post::PUBLISHED_BY,
        }
    }
}

impl From<&Category> for TagRecord {
    fn from(category: &Category) -> Self {
        Self {
            id: category.id,
            name: category.name.clone(),
            slug: category.slug.clone(),
            description: category.description.clone(),
        }
    }
}

impl From<&PostTagLink> for PostTagRecord {
    fn from(link: &PostTagLink) -> Self {
        Self {
            post_id: link.post_id,
            tag_id: link.tag_id,
        }
    }
}

impl GhostExport {
    pub fn new(blog: &Blog, exported_on: i64) -> Self {
        Self {
            meta: ExportMeta {
                exported_on,
                version: EXPORT_VERSION,
            },
            data: ExportData {
                posts: blog.posts.iter().map(PostRecord::from).collect(),
                tags: blog.categories.iter().map(TagRecord::from).collect(),
                posts_tags: blog.links.iter().map(PostTagRecord::from).collect(),
            },
        }
    }

    pub fn to_json(&self) -> Result<Vec<u8>, ConvertError> {
        Ok(serde_json::to_vec(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn blog() -> Blog {
        Blog {
            categories: vec![Category {
                source_id: "c1".to_string(),
                id: 0,
                name: "Tech News".to_string(),
                slug: "Tech-News".to_string(),
                description: String::new(),
            }],
            posts: vec![Post {
                id: 1,
                uuid: Uuid::nil(),
                title: "Hello, World!".to_string(),
                slug: "Hello-World-".to_string(),
                body: "<p>hi</p>".to_string(),
                created_at: 1262304000000,
                updated_at: 1262390400000,
                published_at: 1262304000000,
            }],
            links: vec![PostTagLink {
                post_id: 1,
                tag_id: 0,
            }],
        }
    }

    #[test]
    fn serializes_the_ghost_layout() {
        let export = GhostExport::new(&blog(), 1700000000000);
        let value: Value = serde_json::from_slice(&export.to_json().unwrap()).unwrap();

        assert_eq!(
            value,
            json!({
                "meta": { "exported_on": 1700000000000_i64, "version": "004" },
                "data": {
                    "posts": [{
                        "id": 1,
                        "uuid": "00000000-0000-0000-0000-000000000000",
                        "title": "Hello, World!",
                        "slug": "Hello-World-",
                        "markdown": "<p>hi</p>",
                        "html": "<p>hi</p>",
                        "image": null,
                        "featured": 0,
                        "page": 0,
                        "status": "published",
                        "language": "en_US",
                        "meta_title": null,
                        "meta_description": null,
                        "author_id": 1,
                        "created_at": 1262304000000_i64,
                        "created_by": 1,
                        "updated_at": 1262390400000_i64,
                        "updated_by": 1,
                        "published_at": 1262304000000_i64,
                        "published_by": 1
                    }],
                    "tags": [{
                        "id": 0,
                        "name": "Tech News",
                        "slug": "Tech-News",
                        "description": ""
                    }],
                    "posts_tags": [{ "post_id": 1, "tag_id": 0 }]
                }
            })
        );
    }

    #[test]
    fn keys_follow_declaration_order() {
        let export = GhostExport::new(&blog(), 0);
        let text = String::from_utf8(export.to_json().unwrap()).unwrap();
        assert!(text.starts_with(r#"{"meta":{"exported_on":0,"version":"004"},"data":{"posts":[{"id":1,"uuid":"#));
        assert!(text.contains(r#""image":null,"featured":0,"page":0,"status":"published""#));
        assert!(text.ends_with(r#""posts_tags":[{"post_id":1,"tag_id":0}]}}"#));
    }

    #[test]
    fn empty_blog_still_has_all_arrays() {
        let empty = Blog {
            categories: Vec::new(),
            posts: Vec::new(),
            links: Vec::new(),
        };
        let text = String::from_utf8(GhostExport::new(&empty, 5).to_json().unwrap()).unwrap();
        assert_eq!(
            text,
            r#"{"meta":{"exported_on":5,"version":"004"},"data":{"posts":[],"tags":[],"posts_tags":[]}}"#
        );
    }
}
