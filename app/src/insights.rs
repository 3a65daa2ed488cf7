//! This module defines the `insights` component, the blog section of the site.
//!
//! With no post selected it shows the "OUR BLOG" hero and a card for every post,
//! the first one featured. With a post selected the hero is omitted and the full
//! article is shown instead. The sidebar sits beside both views.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::{blog_card, sidebar};
use crate::content::{post, posts};
use crate::navigation::use_navigator;
use crate::types::PostId;

fn hero() -> impl IntoView {
    view! {
        <Title text="Insights \u{2013} SentiNEX"/>
        <section class="pt-20 pb-16 bg-white border-b border-gray-50">
            <div class="px-4 mx-auto max-w-7xl">
                <span class="block mb-4 text-xs font-bold tracking-widest uppercase animate-pulse text-[#166534]">
                    "OUR BLOG"
                </span>
                <div class="flex flex-col gap-6 justify-between md:flex-row md:items-end">
                    <h1 class="text-5xl font-bold tracking-tight text-[#166534]">"Insights and Updates"</h1>
                </div>
            </div>
        </section>
    }
}

fn list(on_select: Callback<PostId>) -> impl IntoView {
    posts()
        .iter()
        .enumerate()
        .map(|(idx, post)| blog_card::component(post, idx == 0, on_select))
        .collect_view()
}

/// Renders the Insights section for the given selection.
///
/// A selection that does not match any post falls back to the list.
pub fn component(selected: Option<PostId>) -> impl IntoView {
    let nav = use_navigator();
    let on_select = Callback::new(move |id: PostId| nav.select_post(id));
    let on_back = Callback::new(move |()| nav.clear_selected_post());

    let selected = selected.and_then(post);
    let main_class = if selected.is_some() {
        "px-4 py-12 mx-auto max-w-7xl"
    } else {
        "px-4 py-16 mx-auto max-w-7xl"
    };

    view! {
        {selected.is_none().then(hero)}
        <main class=main_class>
            <div class="grid grid-cols-1 gap-12 lg:grid-cols-3">
                <div class="space-y-8 lg:col-span-2">
                    {match selected {
                        Some(post) => crate::post::component(post, on_back).into_any(),
                        None => list(on_select).into_any(),
                    }}
                </div>
                <aside class="lg:col-span-1">
                    <div class="sticky top-28">{sidebar::component()}</div>
                </aside>
            </div>
        </main>
    }
}
