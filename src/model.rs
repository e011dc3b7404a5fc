use std::collections::HashMap;

use uuid::Uuid;

/// Maps a category's opaque source id to its sequential id.
pub type CategoryLookup = HashMap<String, usize>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    /// Only used to resolve post references, never exported.
    pub source_id: String,
    /// Zero-based position in the `categories` section.
    pub id: usize,
    pub name: String,
    pub slug: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    /// One-based position in the `posts` section.
    pub id: usize,
    pub uuid: Uuid,
    pub title: String,
    pub slug: String,
    pub body: String,
    pub created_at: i64,
    pub updated_at: i64,
    pub published_at: i64,
}

impl Post {
    pub const FEATURED: u8 = 0;
    pub const PAGE: u8 = 0;
    pub const STATUS: &'static str = "published";
    pub const LANGUAGE: &'static str = "en_US";
    pub const AUTHOR_ID: u32 = 1;
    pub const CREATED_BY: u32 = 1;
    pub const UPDATED_BY: u32 = 1;
    pub const PUBLISHED_BY: u32 = 1;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PostTagLink {
    pub post_id: usize,
    pub tag_id: usize,
}

/// Everything extracted from one BlogML document.
#[derive(Debug, Clone)]
pub struct Blog {
    pub categories: Vec<Category>,
    pub posts: Vec<Post>,
    pub links: Vec<PostTagLink>,
}
