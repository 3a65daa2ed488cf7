use icondata::{FiMail, FiTrendingUp};
use leptos::prelude::*;

use crate::components::{footer::CONTACT_EMAIL, icons::glyph};
use crate::content::posts;
use crate::navigation::{Section, use_navigator};

/// Number of posts listed under "Recent insights".
const RECENT: usize = 3;

pub fn component() -> impl IntoView {
    let nav = use_navigator();

    let mut categories: Vec<&'static str> = posts().iter().map(|post| post.category.as_str()).collect();
    categories.sort_unstable();
    categories.dedup();

    view! {
        <div class="space-y-8">
            <div class="p-8 text-white rounded-3xl bg-[#14532d]">
                {glyph(FiTrendingUp, "mb-4 size-8 text-[#fbbf24]")}
                <h3 class="mb-3 text-xl font-bold">"See what Nigeria is saying"</h3>
                <p class="mb-6 text-sm leading-relaxed text-gray-300">
                    "Get a live sentiment briefing on your brand, sector or policy area."
                </p>
                <button
                    class="py-3 w-full text-sm font-bold rounded-xl transition-colors bg-[#fbbf24] text-[#14532d] hover:bg-[#f59e0b]"
                    on:click=move |_| nav.select_section(Section::Contact)
                >
                    "Request a briefing"
                </button>
            </div>

            <div class="p-8 bg-white rounded-3xl border border-gray-100">
                <h3 class="mb-5 text-sm font-bold tracking-widest text-gray-900 uppercase">"Recent insights"</h3>
                <ul class="space-y-4">
                    {posts()
                        .iter()
                        .take(RECENT)
                        .map(|post| {
                            let id = post.id;
                            view! {
                                <li>
                                    <button
                                        class="text-sm font-medium leading-snug text-left text-gray-700 transition-colors hover:text-[#166534]"
                                        on:click=move |_| nav.select_post(id)
                                    >
                                        {post.title.as_str()}
                                    </button>
                                    <p class="mt-1 text-xs text-gray-400">{post.display_date()}</p>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>

            <div class="p-8 bg-white rounded-3xl border border-gray-100">
                <h3 class="mb-5 text-sm font-bold tracking-widest text-gray-900 uppercase">"Topics"</h3>
                <div class="flex flex-wrap gap-2">
                    {categories
                        .into_iter()
                        .map(|category| {
                            view! {
                                <span class="py-1.5 px-3 text-xs font-medium rounded-full text-[#166534] bg-[#f0f9f4]">
                                    {category}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            <div class="p-8 rounded-3xl border border-gray-100 bg-[#fafafa]">
                <h3 class="mb-2 text-sm font-bold tracking-widest text-gray-900 uppercase">"Newsletter"</h3>
                <p class="mb-4 text-sm text-gray-500">"Monthly sentiment highlights, straight to your inbox."</p>
                <a
                    href=format!("mailto:{CONTACT_EMAIL}?subject=Subscribe")
                    class="flex gap-2 items-center text-sm font-semibold text-[#166534] hover:underline"
                >
                    {glyph(FiMail, "size-4")}
                    "Subscribe by email"
                </a>
            </div>
        </div>
    }
}
