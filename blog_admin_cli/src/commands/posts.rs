use std::path::PathBuf;

use anyhow::Result;
use blog_admin_lib::{AdminClient, LegacyPostForm, PostForm};
use clap::{Args, Subcommand};

use super::{read_form, report};
use crate::output::{print_json, print_page_summary, print_posts, OutputFormat};

#[derive(Args)]
pub struct PostsArgs {
    #[command(subcommand)]
    pub command: PostsCommand,
}

#[derive(Subcommand)]
pub enum PostsCommand {
    /// List one page of posts
    List {
        /// Page number
        #[arg(long, default_value = "1")]
        page: i64,
    },
    /// Show a single post by slug
    Get { slug: String },
    /// Create a post from a JSON form file
    Create {
        /// Path to the JSON form
        #[arg(long)]
        file: PathBuf,
        /// Validate with the older rule set (required slug, optional category)
        #[arg(long)]
        legacy_schema: bool,
    },
    /// Update a post from a JSON form file
    Update {
        id: i64,
        /// Path to the JSON form
        #[arg(long)]
        file: PathBuf,
        /// Validate with the older rule set (required slug, optional category)
        #[arg(long)]
        legacy_schema: bool,
    },
    /// Delete a post by id
    Delete { id: i64 },
}

pub async fn run(args: &PostsArgs, client: &AdminClient, format: &OutputFormat) -> Result<()> {
    match &args.command {
        PostsCommand::List { page } => {
            let resp = client.get_posts(*page).await.map_err(report)?;
            print_page_summary(&resp.meta, "posts");
            print_posts(&resp.data, format);
        }
        PostsCommand::Get { slug } => {
            let post = client.get_post(slug).await.map_err(report)?;
            match format {
                OutputFormat::Json => print_json(&post),
                _ => print_posts(std::slice::from_ref(&post), format),
            }
        }
        PostsCommand::Create {
            file,
            legacy_schema,
        } => {
            let post = if *legacy_schema {
                let form: LegacyPostForm = read_form(file)?;
                client.create_post(&form).await
            } else {
                let form: PostForm = read_form(file)?;
                client.create_post(&form).await
            }
            .map_err(report)?;
            eprintln!("Created post {} ({})", post.id, post.slug);
            print_posts(std::slice::from_ref(&post), format);
        }
        PostsCommand::Update {
            id,
            file,
            legacy_schema,
        } => {
            let post = if *legacy_schema {
                let form: LegacyPostForm = read_form(file)?;
                client.update_post(*id, &form).await
            } else {
                let form: PostForm = read_form(file)?;
                client.update_post(*id, &form).await
            }
            .map_err(report)?;
            eprintln!("Updated post {}", post.id);
            print_posts(std::slice::from_ref(&post), format);
        }
        PostsCommand::Delete { id } => {
            client.delete_post(*id).await.map_err(report)?;
            eprintln!("Deleted post {}", id);
        }
    }

    Ok(())
}
