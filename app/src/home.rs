//! This module defines the `home` component, the landing page of the site.
//!
//! It introduces SentiNEX with a hero section, summarises what the platform and
//! the consulting practice do, and routes visitors to Contact, Product or
//! Consulting through the callbacks it is given.

use icondata::{FiArrowRight, FiBarChart2, FiGlobe, FiMessageCircle, FiTarget};
use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::icons::glyph;

/// Renders the landing page.
///
/// * `on_start_conversation` - "Start a conversation", leads to Contact.
/// * `on_view_platform` - "View the platform", leads to Product.
/// * `on_view_consulting` - "Explore consulting", leads to Consulting.
pub fn component(
    on_start_conversation: Callback<()>,
    on_view_platform: Callback<()>,
    on_view_consulting: Callback<()>,
) -> impl IntoView {
    let pillars = [
        (
            FiMessageCircle,
            "Listen",
            "We gather public conversation from social platforms, news comments and radio call-ins, in English, Pidgin, Yoruba, Hausa and Igbo.",
        ),
        (
            FiBarChart2,
            "Understand",
            "Models trained on Nigerian language separate real frustration from banter, and show how the mood moves across regions and weeks.",
        ),
        (
            FiTarget,
            "Act",
            "Plain-language briefings tell your team what people care about and what to say next, not just how many mentions you had.",
        ),
    ];

    view! {
        <Title text="SentiNEX \u{2013} Clear Insight for Nigeria"/>
        <section class="overflow-hidden relative bg-white border-b border-gray-50">
            <div class="py-24 px-4 mx-auto max-w-7xl md:py-32">
                <span class="block mb-6 text-xs font-bold tracking-widest uppercase text-[#166534]">
                    "Sentiment intelligence for Nigeria"
                </span>
                <h1 class="mb-8 max-w-4xl text-5xl font-bold tracking-tight leading-tight md:text-6xl text-[#14532d]">
                    "Clear insight into what Nigeria really thinks."
                </h1>
                <p class="mb-12 max-w-2xl text-lg leading-relaxed text-gray-600">
                    "SentiNEX turns millions of everyday conversations into data-aware insight, so brands, media and public institutions can respond to what people actually mean."
                </p>
                <div class="flex flex-wrap gap-4">
                    <button
                        class="flex gap-2 items-center py-4 px-8 font-semibold text-white rounded-xl transition-colors bg-[#166534] hover:bg-[#14532d]"
                        on:click=move |_| on_start_conversation.run(())
                    >
                        "Start a conversation"
                        {glyph(FiArrowRight, "size-4")}
                    </button>
                    <button
                        class="py-4 px-8 font-semibold rounded-xl border transition-colors text-[#166534] border-[#166534]/30 hover:bg-[#f0f9f4]"
                        on:click=move |_| on_view_platform.run(())
                    >
                        "View the platform"
                    </button>
                </div>
            </div>
        </section>

        <section class="py-24 px-4 mx-auto max-w-7xl">
            <h2 class="mb-4 text-3xl font-bold text-[#14532d]">"From noise to strategy"</h2>
            <p class="mb-14 max-w-2xl text-gray-600">
                "Every engagement follows the same three steps, whether you use the platform yourself or work with our analysts."
            </p>
            <div class="grid grid-cols-1 gap-8 md:grid-cols-3">
                {pillars
                    .into_iter()
                    .map(|(icon, title, text)| {
                        view! {
                            <div class="p-8 bg-white rounded-3xl border border-gray-100">
                                <div class="flex justify-center items-center mb-6 rounded-2xl size-12 text-[#166534] bg-[#f0f9f4]">
                                    {glyph(icon, "size-6")}
                                </div>
                                <h3 class="mb-3 text-xl font-bold text-gray-900">{title}</h3>
                                <p class="leading-relaxed text-gray-600">{text}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>

        <section class="py-24 text-white bg-[#14532d]">
            <div class="grid grid-cols-1 gap-12 items-center px-4 mx-auto max-w-7xl md:grid-cols-2">
                <div>
                    {glyph(FiGlobe, "mb-6 size-10 text-[#fbbf24]")}
                    <h2 class="mb-4 text-3xl font-bold">"Need more than a dashboard?"</h2>
                    <p class="leading-relaxed text-gray-300">
                        "Our consulting team designs research, runs tracking studies and briefs leadership during campaigns, launches and crises."
                    </p>
                </div>
                <div class="md:text-right">
                    <button
                        class="py-4 px-8 font-semibold rounded-xl transition-colors bg-[#fbbf24] text-[#14532d] hover:bg-[#f59e0b]"
                        on:click=move |_| on_view_consulting.run(())
                    >
                        "Explore consulting"
                    </button>
                </div>
            </div>
        </section>
    }
}
