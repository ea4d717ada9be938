use std::path::PathBuf;

use anyhow::Result;
use blog_admin_lib::{AdminClient, CategoryForm, LegacyCategoryForm};
use clap::{Args, Subcommand};

use super::{read_form, report};
use crate::output::{print_categories, print_json, print_page_summary, print_posts, OutputFormat};

#[derive(Args)]
pub struct CategoriesArgs {
    #[command(subcommand)]
    pub command: CategoriesCommand,
}

#[derive(Subcommand)]
pub enum CategoriesCommand {
    /// List categories, one page at a time or all at once
    List {
        /// Fetch every category without pagination
        #[arg(long, conflicts_with_all = ["page", "per_page"])]
        all: bool,

        /// Page number
        #[arg(long, default_value = "1")]
        page: i64,

        /// Results per page
        #[arg(long, default_value = "10")]
        per_page: i64,
    },
    /// Show a single category by slug
    Get { slug: String },
    /// Create a category from a JSON form file
    Create {
        /// Path to the JSON form
        #[arg(long)]
        file: PathBuf,
        /// Validate with the older rule set (optional slug, unchecked parent id)
        #[arg(long)]
        legacy_schema: bool,
    },
    /// Update a category from a JSON form file
    Update {
        id: i64,
        /// Path to the JSON form
        #[arg(long)]
        file: PathBuf,
        /// Validate with the older rule set (optional slug, unchecked parent id)
        #[arg(long)]
        legacy_schema: bool,
    },
    /// Delete a category by id
    Delete { id: i64 },
    /// List the posts filed under a category
    Posts {
        slug: String,

        /// Page number
        #[arg(long, default_value = "1")]
        page: i64,
    },
}

pub async fn run(args: &CategoriesArgs, client: &AdminClient, format: &OutputFormat) -> Result<()> {
    match &args.command {
        CategoriesCommand::List {
            all: true, ..
        } => {
            let categories = client.get_categories().await.map_err(report)?;
            eprintln!("{} categories", categories.len());
            print_categories(&categories, format);
        }
        CategoriesCommand::List { page, per_page, .. } => {
            let resp = client
                .get_categories_paginated(*page, *per_page)
                .await
                .map_err(report)?;
            print_page_summary(&resp.meta, "categories");
            print_categories(&resp.data, format);
        }
        CategoriesCommand::Get { slug } => {
            let category = client.get_category(slug).await.map_err(report)?;
            match format {
                OutputFormat::Json => print_json(&category),
                _ => print_categories(std::slice::from_ref(&category), format),
            }
        }
        CategoriesCommand::Create {
            file,
            legacy_schema,
        } => {
            let category = if *legacy_schema {
                let form: LegacyCategoryForm = read_form(file)?;
                client.create_category(&form).await
            } else {
                let form: CategoryForm = read_form(file)?;
                client.create_category(&form).await
            }
            .map_err(report)?;
            eprintln!("Created category {} ({})", category.id, category.slug);
            print_categories(std::slice::from_ref(&category), format);
        }
        CategoriesCommand::Update {
            id,
            file,
            legacy_schema,
        } => {
            let category = if *legacy_schema {
                let form: LegacyCategoryForm = read_form(file)?;
                client.update_category(*id, &form).await
            } else {
                let form: CategoryForm = read_form(file)?;
                client.update_category(*id, &form).await
            }
            .map_err(report)?;
            eprintln!("Updated category {}", category.id);
            print_categories(std::slice::from_ref(&category), format);
        }
        CategoriesCommand::Delete { id } => {
            client.delete_category(*id).await.map_err(report)?;
            eprintln!("Deleted category {}", id);
        }
        CategoriesCommand::Posts { slug, page } => {
            let resp = client
                .get_category_posts(slug, *page)
                .await
                .map_err(report)?;
            print_page_summary(&resp.meta, "posts");
            print_posts(&resp.data, format);
        }
    }

    Ok(())
}
