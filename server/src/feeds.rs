use app::content::posts;
use app::types::Post;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Response;
use core::fmt::{self, Write as _};
use markdown::{MarkdownError, process_markdown};
use rss::{Category, ChannelBuilder, Guid, Item};
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, warn};

use crate::config::SiteConfig;

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("failed to render post {slug}: {source}")]
    Markdown {
        slug: String,
        #[source]
        source: MarkdownError,
    },
    #[error("failed to write sitemap: {0}")]
    Write(#[from] fmt::Error),
}

pub(crate) fn build_response(body: String, content_type: &str, status: StatusCode) -> Response<String> {
    match Response::builder()
        .status(status)
        .header("Content-Type", content_type)
        .body(body)
    {
        Ok(response) => response,
        Err(build_error) => {
            error!(?build_error, "Failed to build HTTP response");
            let mut fallback = Response::new(String::new());
            *fallback.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
            fallback
        }
    }
}

/// RFC 2822 timestamp at midnight UTC of the post's publish date.
fn pub_date(post: &Post) -> Option<String> {
    let Some(date) = post.published_on() else {
        warn!(slug = %post.slug, published = %post.published, "Post has an unparseable publish date");
        return None;
    };
    date.and_hms_opt(0, 0, 0).map(|midnight| midnight.and_utc().to_rfc2822())
}

fn feed_item(post: &Post, site: &SiteConfig) -> Result<Item, FeedError> {
    let body = process_markdown(&post.body).map_err(|source| {
        error!(slug = %post.slug, "Failed to render Markdown for post: {source}");
        FeedError::Markdown {
            slug: post.slug.clone(),
            source,
        }
    })?;

    let mut guid = Guid::default();
    guid.set_value(format!("insights/{}", post.slug));
    guid.set_permalink(false);

    let mut category = Category::default();
    category.set_name(post.category.clone());

    let mut item = Item::default();
    item.set_title(post.title.clone());
    // Posts have no URL of their own; the Insights view is reached from the root.
    item.set_link(site.url("/"));
    item.set_guid(guid);
    item.set_author(post.author.name.clone());
    item.set_categories(vec![category]);
    item.set_pub_date(pub_date(post));
    item.set_description(body);
    Ok(item)
}

pub fn generate_rss(posts: &[Post], site: &SiteConfig) -> Result<String, FeedError> {
    let items = posts
        .iter()
        .map(|post| feed_item(post, site))
        .collect::<Result<Vec<_>, _>>()?;

    let channel = ChannelBuilder::default()
        .title("SentiNEX Insights")
        .link(site.url("/"))
        .description("Analysis of public sentiment and policy in Nigeria from the SentiNEX team")
        .language(Some("en".to_owned()))
        .items(items)
        .build();

    Ok(channel.to_string())
}

pub async fn rss_handler(State(site): State<Arc<SiteConfig>>) -> Response<String> {
    match generate_rss(posts(), &site) {
        Ok(rss) => build_response(rss, "application/rss+xml", StatusCode::OK),
        Err(err) => {
            error!(?err, "Failed to generate RSS feed");
            build_response(
                "Failed to generate RSS feed".to_string(),
                "text/plain; charset=utf-8",
                StatusCode::INTERNAL_SERVER_ERROR,
            )
        }
    }
}

fn write_url(sitemap: &mut String, loc: &str, freq: &str, priority: &str, lastmod: Option<&str>) -> fmt::Result {
    writeln!(sitemap, "<url>")?;
    writeln!(sitemap, "<loc>{loc}</loc>")?;
    writeln!(sitemap, "<changefreq>{freq}</changefreq>")?;
    writeln!(sitemap, "<priority>{priority}</priority>")?;
    if let Some(lastmod) = lastmod {
        writeln!(sitemap, "<lastmod>{lastmod}</lastmod>")?;
    }
    writeln!(sitemap, "</url>")
}

/// Sitemap of the site root and the feed. The root's `lastmod` follows the
/// newest post.
pub fn generate_sitemap(posts: &[Post], site: &SiteConfig) -> Result<String, FeedError> {
    let newest = posts
        .iter()
        .filter_map(Post::published_on)
        .max()
        .map(|date| date.format("%Y-%m-%d").to_string());

    let mut sitemap = String::new();
    sitemap.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    sitemap.push_str("<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n");
    write_url(&mut sitemap, &site.url("/"), "weekly", "1.0", newest.as_deref())?;
    write_url(&mut sitemap, &site.url("/rss.xml"), "weekly", "0.5", newest.as_deref())?;
    sitemap.push_str("</urlset>\n");
    Ok(sitemap)
}

pub async fn sitemap_handler(State(site): State<Arc<SiteConfig>>) -> Response<String> {
    match generate_sitemap(posts(), &site) {
        Ok(sitemap) => build_response(sitemap, "application/xml", StatusCode::OK),
        Err(err) => {
            error!(?err, "Failed to build sitemap");
            build_response(
                "Failed to build sitemap".to_string(),
                "text/plain; charset=utf-8",
                StatusCode::INTERNAL_SERVER_ERROR,
            )
        }
    }
}
