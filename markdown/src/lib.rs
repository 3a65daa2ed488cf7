//! This crate renders Insights post bodies from Markdown to HTML, with syntax
//! highlighting for fenced code blocks, and estimates how long a body takes to read.

use pulldown_cmark::html::push_html;
use pulldown_cmark::{CodeBlockKind, CowStr, Event, Options, Parser, Tag, TagEnd, TextMergeStream};
use pulldown_cmark_escape::escape_href;
use std::sync::LazyLock;
use syntect::easy::HighlightLines;
use syntect::highlighting::{Theme, ThemeSet};
use syntect::html::{IncludeBackground, styled_line_to_highlighted_html};
use syntect::parsing::SyntaxSet;
use thiserror::Error;

/// Average adult silent-reading speed used for the "min read" label.
pub const WORDS_PER_MINUTE: usize = 200;

const THEME: &str = "InspiredGitHub";

static SYNTAXES: LazyLock<SyntaxSet> = LazyLock::new(SyntaxSet::load_defaults_newlines);
static THEMES: LazyLock<ThemeSet> = LazyLock::new(ThemeSet::load_defaults);

#[derive(Debug, Error)]
pub enum MarkdownError {
    #[error("syntax highlighting failed: {0}")]
    Highlight(#[from] syntect::Error),
    #[error("highlighting theme `{0}` is not bundled")]
    MissingTheme(&'static str),
}

/// Highlights one fenced code block. Unknown languages fall back to plain text.
fn highlight_code_block(
    content: &str,
    language: &str,
    ps: &SyntaxSet,
    theme: &Theme,
) -> Result<String, MarkdownError> {
    let syntax = ps
        .find_syntax_by_token(language)
        .unwrap_or_else(|| ps.find_syntax_plain_text());
    let mut h = HighlightLines::new(syntax, theme);

    let mut highlighted_html = String::with_capacity(content.len() * 3);
    highlighted_html.push_str(
        r#"<pre class="p-4 rounded-xl border border-gray-100 bg-[#f8faf9] overflow-x-auto"><code>"#,
    );

    for line in content.lines() {
        let ranges = h.highlight_line(line, ps)?;
        let escaped = styled_line_to_highlighted_html(&ranges, IncludeBackground::No)?;
        highlighted_html.push_str(&escaped);
        highlighted_html.push('\n');
    }
    highlighted_html.push_str("</code></pre>");

    Ok(highlighted_html)
}

/// URL escaped for use inside a double-quoted attribute.
fn attribute_url(url: &str) -> String {
    let mut escaped = String::with_capacity(url.len());
    escape_href(&mut escaped, url).expect("writing to a String cannot fail");
    escaped
}

/// Renders a post body to HTML.
///
/// Links to other sites open in a new tab, images are centred and scaled to the
/// column width, and fenced code blocks are highlighted.
pub fn process_markdown(markdown: &str) -> Result<String, MarkdownError> {
    let ps = &*SYNTAXES;
    let theme = THEMES.themes.get(THEME).ok_or(MarkdownError::MissingTheme(THEME))?;

    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_TASKLISTS);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(markdown, options);

    let mut events = Vec::new();
    let mut code_block_language: Option<String> = None;
    let mut code_block_content = String::new();
    let mut in_code_block = false;
    let mut skip_image = false;

    for event in TextMergeStream::new(parser) {
        match event {
            Event::Start(Tag::CodeBlock(kind)) => {
                in_code_block = true;
                code_block_content.clear();
                code_block_language = match kind {
                    CodeBlockKind::Fenced(info) => {
                        Some(info.split_whitespace().next().unwrap_or("").to_owned())
                    }
                    CodeBlockKind::Indented => None,
                };
            }
            Event::End(TagEnd::CodeBlock) => {
                in_code_block = false;
                let language = code_block_language.as_deref().unwrap_or("plaintext");
                let highlighted_html =
                    highlight_code_block(&code_block_content, language, ps, theme)?;
                events.push(Event::Html(CowStr::from(highlighted_html)));
                code_block_language = None;
            }
            Event::Text(text) => {
                if in_code_block {
                    code_block_content.push_str(&text);
                } else if !skip_image {
                    events.push(Event::Text(text));
                }
            }
            Event::Start(Tag::Link { dest_url, .. })
                if dest_url.starts_with("http://") || dest_url.starts_with("https://") =>
            {
                let href = attribute_url(&dest_url);
                events.push(Event::Html(CowStr::from(format!(
                    r#"<a href="{href}" target="_blank" rel="noopener noreferrer">"#
                ))));
            }
            // Both link flavours close with a raw tag so the pair always matches.
            Event::End(TagEnd::Link) => {
                events.push(Event::Html(CowStr::from("</a>")));
            }
            Event::Start(Tag::Image { dest_url, .. }) => {
                let src = attribute_url(&dest_url);
                events.push(Event::Html(CowStr::from(format!(
                    r#"<div class="flex justify-center my-6"><img src="{src}" class="w-full rounded-xl" alt=""></div>"#
                ))));
                skip_image = true;
            }
            Event::End(TagEnd::Image) => {
                if !skip_image {
                    events.push(Event::End(TagEnd::Image));
                }
                skip_image = false;
            }
            other => {
                // Alt text of a wrapped image is dropped.
                if !skip_image {
                    events.push(other);
                }
            }
        }
    }

    let mut html_output = String::new();
    push_html(&mut html_output, events.into_iter());

    Ok(html_output)
}

/// Estimated reading time in whole minutes, never less than one.
#[must_use]
pub fn reading_time(markdown: &str) -> usize {
    let words = markdown.split_whitespace().count();
    words.div_ceil(WORDS_PER_MINUTE).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_markdown_basic() {
        let markdown = "# Hello World\n\nThis is a test.";
        let html = process_markdown(markdown).unwrap();
        assert!(html.contains("<h1"));
        assert!(html.contains("Hello World"));
        assert!(html.contains("<p"));
        assert!(html.contains("This is a test"));
    }

    #[test]
    fn test_process_markdown_code_block() {
        let markdown = "```rust\nfn main() {\n    println!(\"Hello, world!\");\n}\n```";
        let html = process_markdown(markdown).unwrap();
        assert!(html.contains("<pre"));
        assert!(html.contains("<code"));
        assert!(html.contains("main"));
    }

    #[test]
    fn test_process_markdown_empty() {
        let html = process_markdown("").unwrap();
        assert!(html.trim().is_empty());
    }

    #[test]
    fn test_external_links_open_in_new_tab() {
        let html = process_markdown("See [the report](https://sentinex.co/report).").unwrap();
        assert!(html.contains(r#"href="https://sentinex.co/report""#));
        assert!(html.contains(r#"target="_blank""#));
        assert!(html.contains("the report</a>"));
    }

    #[test]
    fn test_relative_links_stay_in_tab() {
        let html = process_markdown("[home](/)").unwrap();
        assert!(html.contains(r#"<a href="/">"#));
        assert!(!html.contains("_blank"));
    }

    #[test]
    fn test_images_are_wrapped() {
        let html = process_markdown("![chart](/images/chart.png)").unwrap();
        assert!(html.contains(r#"<img src="/images/chart.png""#));
        assert!(!html.contains(">chart<"));
    }

    #[test]
    fn test_quotes_in_destinations_cannot_break_attributes() {
        let html = process_markdown(r#"[x](<https://a.example/"onmouseover="alert(1)>)"#).unwrap();
        assert!(!html.contains(r#""onmouseover=""#));
        assert!(html.contains("https://a.example/%22onmouseover=%22"));

        let html = process_markdown(r#"![x](</img/a".png>)"#).unwrap();
        assert!(html.contains(r#"src="/img/a%22.png""#));
    }

    #[test]
    fn test_repeated_renders_match() {
        let markdown = "```rust\nlet x = 1;\n```";
        assert_eq!(process_markdown(markdown).unwrap(), process_markdown(markdown).unwrap());
    }

    #[test]
    fn test_markdown_formatting() {
        let html = process_markdown("**bold** and *italic*").unwrap();
        assert!(html.contains("<strong>"));
        assert!(html.contains("<em>"));
    }

    #[test]
    fn test_reading_time() {
        assert_eq!(reading_time(""), 1);
        assert_eq!(reading_time("one two three"), 1);
        assert_eq!(reading_time(&"word ".repeat(200)), 1);
        assert_eq!(reading_time(&"word ".repeat(201)), 2);
        assert_eq!(reading_time(&"word ".repeat(1000)), 5);
    }
}
