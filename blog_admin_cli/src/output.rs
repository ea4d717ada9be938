use blog_admin_lib::types::{BlogCategory, BlogPost, PageMeta};
use blog_admin_lib::FieldErrors;
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Clone, Debug, PartialEq)]
pub enum OutputFormat {
    Table,
    Json,
    Markdown,
}

impl OutputFormat {
    pub fn parse(value: &str) -> Self {
        match value {
            "json" => OutputFormat::Json,
            "markdown" | "md" => OutputFormat::Markdown,
            _ => OutputFormat::Table,
        }
    }
}

#[derive(Tabled)]
struct PostRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Slug")]
    slug: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Author")]
    author: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Updated")]
    updated: String,
}

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Slug")]
    slug: String,
    #[tabled(rename = "Parent")]
    parent: String,
    #[tabled(rename = "Posts")]
    posts: String,
}

// -- Row builders --

fn build_post_rows(posts: &[BlogPost]) -> Vec<PostRow> {
    posts
        .iter()
        .map(|p| PostRow {
            id: p.id,
            title: p.title.clone(),
            slug: p.slug.clone(),
            category: p.category.title.clone(),
            author: p.user.name.clone(),
            status: post_status(p),
            updated: p
                .updated_at_utc()
                .map(|at| at.format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_else(|| p.updated_at.clone()),
        })
        .collect()
}

fn build_category_rows(categories: &[BlogCategory]) -> Vec<CategoryRow> {
    categories
        .iter()
        .map(|c| CategoryRow {
            id: c.id,
            title: c.title.clone(),
            slug: c.slug.clone(),
            parent: match (&c.parent_title, c.parent_id) {
                (Some(title), _) => title.clone(),
                (None, Some(id)) => format!("#{}", id),
                (None, None) => "-".to_string(),
            },
            posts: c
                .posts_count
                .map(|n| n.to_string())
                .unwrap_or_default(),
        })
        .collect()
}

fn post_status(post: &BlogPost) -> String {
    match (post.is_published, post.published_at_utc()) {
        (true, Some(at)) => format!("published {}", at.format("%Y-%m-%d")),
        (true, None) => "published".to_string(),
        (false, _) => "draft".to_string(),
    }
}

fn render<T: Tabled>(rows: Vec<T>, format: &OutputFormat) -> String {
    let mut table = Table::new(rows);
    if *format == OutputFormat::Markdown {
        table.with(Style::markdown());
    }
    table.to_string()
}

// -- Printers --

pub fn print_posts(posts: &[BlogPost], format: &OutputFormat) {
    match format {
        OutputFormat::Json => print_json(&posts),
        _ => println!("{}", render(build_post_rows(posts), format)),
    }
}

pub fn print_categories(categories: &[BlogCategory], format: &OutputFormat) {
    match format {
        OutputFormat::Json => print_json(&categories),
        _ => println!("{}", render(build_category_rows(categories), format)),
    }
}

/// Page summary goes to stderr so stdout stays pipeable.
pub fn print_page_summary(meta: &PageMeta, noun: &str) {
    eprintln!(
        "Page {}/{} ({} total {})",
        meta.current_page, meta.last_page, meta.total, noun
    );
}

pub fn print_field_errors(errors: &FieldErrors) {
    for (field, messages) in errors.iter() {
        for message in messages {
            eprintln!("  {}: {}", field, message);
        }
    }
}

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}
