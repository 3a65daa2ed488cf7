//! This module defines the `post` component, which renders a single Insights
//! article in full.
//!
//! The Markdown body is rendered to HTML when the view is built. The component
//! shows the post's metadata (author, date, read time), an optional header image,
//! and a control that returns to the Insights list.

use icondata::FiArrowLeft;
use leptos::html::{article, button, div, img, p, span};
use leptos::{ev, prelude::*};
use leptos_meta::{Title, TitleProps};

use crate::components::icons::glyph;
use crate::types::Post;

/// Renders the body of `post`, or its excerpt if the body fails to render.
fn body_html(post: &Post) -> String {
    markdown::process_markdown(&post.body).unwrap_or_else(|err| {
        log::error!("Failed to render body of post {}: {err}", post.id);
        format!("<p>{}</p>", post.excerpt)
    })
}

/// Renders the full article for `post`.
///
/// `on_back` is called by the "Back to Insights" control.
pub fn component(post: &'static Post, on_back: Callback<()>) -> impl IntoView {
    article().class("p-8 bg-white rounded-3xl border border-gray-100 md:p-12").child((
        Title(TitleProps::builder().text(format!("{} \u{2013} SentiNEX Insights", post.title)).build()),
        button()
            .on(ev::click, move |_| on_back.run(()))
            .class("flex gap-2 items-center mb-8 text-sm font-semibold transition-colors text-[#166534] hover:text-[#14532d]")
            .child((glyph(FiArrowLeft, "size-4"), "Back to Insights")),
        div().class("flex flex-col gap-4 mb-8").child((
            span()
                .class("self-start py-1 px-3 text-xs font-semibold tracking-wide uppercase rounded-full text-[#166534] bg-[#f0f9f4]")
                .child(post.category.as_str()),
            p().class("text-4xl font-bold tracking-tight leading-tight text-gray-900").child(post.title.as_str()),
            div().class("flex flex-wrap gap-3 items-center text-sm text-gray-500").child((
                p().child(("by ", span().class("font-semibold text-gray-800").child(post.author.name.as_str()))),
                p().class("text-gray-400").child(post.author.role.as_str()),
                p().child(post.display_date()),
                p().child(format!("{} min read", post.read_time())),
            )),
        )),
        // Header images are optional; posts without one go straight to the body.
        post.header_image.as_deref().map(|src| {
            img()
                .alt(post.title.as_str())
                .class("object-cover mb-8 w-full rounded-2xl max-h-[420px]")
                .src(src)
        }),
        // TailwindCSS `prose` classes style the raw HTML produced from Markdown.
        div()
            .class("max-w-none prose prose-lg prose-headings:text-[#14532d] prose-a:text-[#166534] prose-strong:text-gray-900 prose-table:text-sm")
            .inner_html(body_html(post)),
    ))
}
