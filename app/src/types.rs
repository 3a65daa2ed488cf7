use core::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Stable identity of an Insights post.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(pub u32);

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "post:{}", self.0)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Author {
    pub name: String,
    pub role: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Post {
    pub id: PostId,
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    /// Markdown source of the article.
    pub body: String,
    pub category: String,
    pub author: Author,
    /// ISO-8601 calendar date (`YYYY-MM-DD`).
    pub published: String,
    #[serde(default)]
    pub header_image: Option<String>,
}

impl Post {
    pub fn published_on(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.published, "%Y-%m-%d").ok()
    }

    /// Publication date as shown on cards, e.g. `Jan 14, 2025`.
    /// Dates that do not parse are shown verbatim.
    pub fn display_date(&self) -> String {
        self.published_on().map_or_else(
            || self.published.clone(),
            |date| date.format("%b %-d, %Y").to_string(),
        )
    }

    pub fn read_time(&self) -> usize {
        markdown::reading_time(&self.body)
    }
}

#[cfg(test)]
mod post_type_tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_post_default_values() {
        let post = Post::default();

        assert_eq!(post.id, PostId(0));
        assert_eq!(post.title, "");
        assert_eq!(post.header_image, None);
        assert_eq!(post.author, Author::default());
    }

    #[test]
    fn test_display_date_formats_iso_dates() {
        let post = Post {
            published: "2025-01-04".to_string(),
            ..Default::default()
        };

        assert_eq!(post.display_date(), "Jan 4, 2025");
        assert_eq!(post.published_on(), NaiveDate::from_ymd_opt(2025, 1, 4));
    }

    #[test]
    fn test_display_date_keeps_unparseable_dates() {
        let post = Post {
            published: "Spring 2025".to_string(),
            ..Default::default()
        };

        assert_eq!(post.display_date(), "Spring 2025");
        assert!(post.published_on().is_none());
    }

    #[test]
    fn test_read_time_is_at_least_one_minute() {
        let post = Post::default();
        assert_eq!(post.read_time(), 1);
    }

    #[test]
    fn test_post_id_is_a_bare_number_in_json() {
        let post = Post {
            id: PostId(7),
            slug: "polls".to_string(),
            ..Default::default()
        };

        let json_value = serde_json::to_value(&post).expect("JSON conversion failed");

        assert_eq!(json_value["id"], json!(7));
        assert_eq!(json_value["slug"], "polls");
        assert_eq!(json_value["header_image"], serde_json::Value::Null);
    }

    #[test]
    fn test_header_image_is_optional_in_json() {
        let post: Post = serde_json::from_value(json!({
            "id": 3,
            "slug": "s",
            "title": "t",
            "excerpt": "e",
            "body": "b",
            "category": "c",
            "author": { "name": "n", "role": "r" },
            "published": "2025-02-01"
        }))
        .expect("Deserialization failed");

        assert_eq!(post.id, PostId(3));
        assert!(post.header_image.is_none());
    }

    #[test]
    fn test_post_id_display() {
        assert_eq!(PostId(12).to_string(), "post:12");
    }
}
