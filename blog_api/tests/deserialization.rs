use blog_api::types::{BlogCategory, BlogPost, CategoryPatch, PaginatedResponse, PostPatch};
use chrono::{TimeZone, Utc};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

#[test]
fn deserialize_posts_page() {
    let json = load_fixture("posts.json");
    let resp: PaginatedResponse<BlogPost> = serde_json::from_str(&json).unwrap();
    assert_eq!(resp.data.len(), 2);

    let post = &resp.data[0];
    assert_eq!(post.id, 42);
    assert_eq!(post.title, "Перший пост");
    assert_eq!(post.slug, "pershyi-post");
    assert_eq!(post.excerpt.as_deref(), Some("Короткий опис"));
    assert_eq!(post.category_id, 3);
    assert!(post.is_published);
    assert_eq!(
        post.published_at_utc(),
        Some(Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap())
    );
    assert_eq!(post.user.name, "Автор");
    assert_eq!(post.category.slug, "novyny");
}

#[test]
fn deserialize_draft_without_publication_date() {
    let json = load_fixture("posts.json");
    let resp: PaginatedResponse<BlogPost> = serde_json::from_str(&json).unwrap();

    let draft = &resp.data[1];
    assert!(!draft.is_published);
    assert!(draft.published_at.is_none());
    assert!(draft.excerpt.is_none());
}

#[test]
fn deserialize_post_with_plain_timestamps() {
    let json = load_fixture("post_plain_timestamps.json");
    let post: BlogPost = serde_json::from_str(&json).unwrap();
    assert_eq!(post.published_at.as_deref(), Some("2024-01-15 10:30:00"));
    assert_eq!(
        post.published_at_utc(),
        Some(Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap())
    );
    assert_eq!(
        post.created_at_utc(),
        Some(Utc.with_ymd_and_hms(2024, 1, 14, 8, 0, 0).unwrap())
    );

    let encoded = serde_json::to_string(&post).unwrap();
    assert!(encoded.contains("\"published_at\":\"2024-01-15 10:30:00\""));
}

#[test]
fn unrecognised_timestamp_still_decodes() {
    let json = load_fixture("post.json").replace("2024-01-14T08:00:00.000000Z", "вчора");
    let post: BlogPost = serde_json::from_str(&json).unwrap();
    assert_eq!(post.created_at, "вчора");
    assert_eq!(post.created_at_utc(), None);
}

#[test]
fn deserialize_paginated_meta_and_links() {
    let json = load_fixture("posts.json");
    let resp: PaginatedResponse<BlogPost> = serde_json::from_str(&json).unwrap();
    assert_eq!(resp.meta.current_page, 2);
    assert_eq!(resp.meta.from, Some(11));
    assert_eq!(resp.meta.to, Some(12));
    assert_eq!(resp.meta.last_page, 2);
    assert_eq!(resp.meta.total, 12);
    assert!(resp.links.prev.is_some());
    assert!(resp.links.next.is_none());
    assert!(!resp.has_next_page());
    assert!(resp.has_prev_page());
}

#[test]
fn deserialize_empty_page() {
    let json = load_fixture("posts_empty.json");
    let resp: PaginatedResponse<BlogPost> = serde_json::from_str(&json).unwrap();
    assert!(resp.is_empty());
    assert_eq!(resp.meta.total, 0);
    assert_eq!(resp.meta.from, None);
    assert_eq!(resp.meta.to, None);
    assert!(!resp.has_next_page());
}

#[test]
fn deserialize_all_categories() {
    let json = load_fixture("categories_all.json");
    let categories: Vec<BlogCategory> = serde_json::from_str(&json).unwrap();
    assert_eq!(categories.len(), 2);

    let root = &categories[0];
    assert!(root.is_root);
    assert!(root.parent_id.is_none());
    assert!(root.posts_count.is_none());
    assert!(root.is_consistent());

    let child = &categories[1];
    assert!(!child.is_root);
    assert_eq!(child.parent_id, Some(1));
    assert_eq!(child.parent_title.as_deref(), Some("Без категорії"));
    assert_eq!(child.posts_count, Some(12));
    assert!(child.is_consistent());
}

#[test]
fn category_with_parent_marked_root_is_inconsistent() {
    let json = load_fixture("category.json");
    let mut category: BlogCategory = serde_json::from_str(&json).unwrap();
    category.is_root = true;
    assert!(!category.is_consistent());
}

#[test]
fn deserialize_categories_page() {
    let json = load_fixture("categories_page.json");
    let resp: PaginatedResponse<BlogCategory> = serde_json::from_str(&json).unwrap();
    assert_eq!(resp.data.len(), 1);
    assert_eq!(resp.meta.last_page, 3);
    assert!(resp.has_next_page());
    assert!(!resp.has_prev_page());
}

#[test]
fn blog_post_json_round_trip() {
    let json = load_fixture("post.json");
    let post: BlogPost = serde_json::from_str(&json).unwrap();
    let encoded = serde_json::to_string(&post).unwrap();
    let decoded: BlogPost = serde_json::from_str(&encoded).unwrap();
    assert_eq!(post, decoded);
}

#[test]
fn post_patch_omits_unset_fields() {
    let patch = PostPatch::default().with_title("Новий заголовок").with_published(true);
    let value = serde_json::to_value(&patch).unwrap();
    assert_eq!(
        value,
        serde_json::json!({"title": "Новий заголовок", "is_published": true})
    );
}

#[test]
fn category_patch_sends_explicit_null_parent() {
    let detached = serde_json::to_value(CategoryPatch::default().detach_parent()).unwrap();
    assert_eq!(detached, serde_json::json!({"parent_id": null}));

    let untouched = serde_json::to_value(CategoryPatch::default().with_title("Новини")).unwrap();
    assert_eq!(untouched, serde_json::json!({"title": "Новини"}));
}

#[test]
fn deserialize_malformed_json_returns_error() {
    let bad_json = r#"{"data": not valid json}"#;
    let result = serde_json::from_str::<PaginatedResponse<BlogPost>>(bad_json);
    assert!(result.is_err());
}

#[test]
fn deserialize_missing_required_fields_returns_error() {
    let json = r#"{"meta": {"current_page": 1}}"#;
    let result = serde_json::from_str::<PaginatedResponse<BlogPost>>(json);
    assert!(result.is_err());
}
