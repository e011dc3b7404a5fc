use tracing::{debug, info};
use uuid::Uuid;

use crate::{
    error::ConvertError,
    model::{Blog, Category, CategoryLookup, Post, PostTagLink},
    slug::slugify,
    structure::{BlogSections, CategoriesSection, PostNode, PostsSection, TextNode},
    timestamp::parse_epoch_millis,
};

pub fn extract_blog(sections: &BlogSections) -> Result<Blog, ConvertError> {
    let (categories, lookup) = extract_categories(&sections.categories)?;
    let (posts, links) = extract_posts(&sections.posts, &lookup)?;
    info!(
        "Extracted {} categories, {} posts, {} post-tag links",
        categories.len(),
        posts.len(),
        links.len()
    );
    Ok(Blog {
        categories,
        posts,
        links,
    })
}

pub fn extract_categories(
    section: &CategoriesSection,
) -> Result<(Vec<Category>, CategoryLookup), ConvertError> {
    let mut categories = Vec::with_capacity(section.categories.len());
    let mut lookup = CategoryLookup::with_capacity(section.categories.len());

    for (id, node) in section.categories.iter().enumerate() {
        let source_id = node
            .id
            .clone()
            .ok_or_else(|| ConvertError::Schema(format!("category {id} has no id attribute")))?;
        let name = text_of(node.title.as_ref(), || {
            format!("category {source_id:?} has no <title>")
        })?;

        if lookup.insert(source_id.clone(), id).is_some() {
            return Err(ConvertError::Schema(format!(
                "duplicate category id {source_id:?}"
            )));
        }

        categories.push(Category {
            source_id,
            id,
            slug: slugify(&name),
            name,
            description: String::new(),
        });
    }

    Ok((categories, lookup))
}

pub fn extract_posts(
    section: &PostsSection,
    lookup: &CategoryLookup,
) -> Result<(Vec<Post>, Vec<PostTagLink>), ConvertError> {
    let mut posts = Vec::with_capacity(section.posts.len());
    let mut links = Vec::new();

    for (index, node) in section.posts.iter().enumerate() {
        let id = index + 1;
        posts.push(extract_post(id, node)?);

        if let Some(refs) = &node.categories {
            for category in &refs.refs {
                let reference = category.reference.as_deref().ok_or_else(|| {
                    ConvertError::Schema(format!("post {id} has a category without a ref"))
                })?;
                let tag_id = *lookup
                    .get(reference)
                    .ok_or_else(|| ConvertError::Reference {
                        post: id,
                        reference: reference.to_string(),
                    })?;
                links.push(PostTagLink {
                    post_id: id,
                    tag_id,
                });
            }
        }
    }

    Ok((posts, links))
}

fn extract_post(id: usize, node: &PostNode) -> Result<Post, ConvertError> {
    let title = text_of(node.title.as_ref(), || format!("post {id} has no <title>"))?;
    let body = text_of(node.content.as_ref(), || format!("post {id} has no <content>"))?;
    let created_at = parse_epoch_millis(attribute(&node.date_created, "date-created", id)?)?;
    let updated_at = parse_epoch_millis(attribute(&node.date_modified, "date-modified", id)?)?;

    debug!("Post {}: {:?}", id, title);

    Ok(Post {
        id,
        uuid: Uuid::new_v4(),
        slug: slugify(&title),
        title,
        body,
        created_at,
        updated_at,
        published_at: created_at,
    })
}

fn text_of(
    node: Option<&TextNode>,
    missing: impl FnOnce() -> String,
) -> Result<String, ConvertError> {
    node.map(|n| n.text.clone())
        .ok_or_else(|| ConvertError::Schema(missing()))
}

fn attribute<'a>(
    value: &'a Option<String>,
    name: &str,
    post: usize,
) -> Result<&'a str, ConvertError> {
    value
        .as_deref()
        .ok_or_else(|| ConvertError::Schema(format!("post {post} has no {name} attribute")))
}
