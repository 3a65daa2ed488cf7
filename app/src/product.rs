//! The Product page: an overview of the SentiNEX platform.

use icondata::{FiActivity, FiBell, FiFileText, FiLayers, FiMap, FiShield};
use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::icons::glyph;

/// Renders the Product page. `on_demo_request` runs when a visitor asks for a demo.
pub fn component(on_demo_request: Callback<()>) -> impl IntoView {
    let features = [
        (
            FiActivity,
            "Live sentiment tracking",
            "Follow how people feel about a brand, policy or event as the conversation happens, with hourly updates.",
        ),
        (
            FiLayers,
            "Nigerian language models",
            "Classifiers trained on English, Pidgin and code-switched posts, with confidence scores on every prediction.",
        ),
        (
            FiMap,
            "Regional breakdowns",
            "Compare sentiment across states and geopolitical zones to see where a message lands and where it does not.",
        ),
        (
            FiBell,
            "Spike alerts",
            "Get notified when negative conversation accelerates, before it becomes tomorrow's headline.",
        ),
        (
            FiFileText,
            "Briefing reports",
            "Weekly summaries written for decision makers, with the themes driving each shift in mood.",
        ),
        (
            FiShield,
            "Responsible by design",
            "We analyse public conversation only and report in aggregate. No individual profiling.",
        ),
    ];

    view! {
        <Title text="Platform \u{2013} SentiNEX"/>
        <section class="bg-white border-b border-gray-50">
            <div class="py-20 px-4 mx-auto max-w-7xl">
                <span class="block mb-4 text-xs font-bold tracking-widest uppercase text-[#166534]">"The platform"</span>
                <h1 class="mb-6 max-w-3xl text-5xl font-bold tracking-tight text-[#166534]">
                    "Sentiment analytics built for how Nigerians speak."
                </h1>
                <p class="mb-10 max-w-2xl text-lg text-gray-600">
                    "One workspace to monitor public opinion, understand the reasons behind it and share clear answers with your team."
                </p>
                <button
                    class="py-4 px-8 font-semibold text-white rounded-xl transition-colors bg-[#166534] hover:bg-[#14532d]"
                    on:click=move |_| on_demo_request.run(())
                >
                    "Request a demo"
                </button>
            </div>
        </section>

        <section class="py-20 px-4 mx-auto max-w-7xl">
            <div class="grid grid-cols-1 gap-8 md:grid-cols-2 lg:grid-cols-3">
                {features
                    .into_iter()
                    .map(|(icon, title, text)| {
                        view! {
                            <div class="p-8 bg-white rounded-3xl border border-gray-100 transition-shadow hover:shadow-md">
                                <div class="mb-5 text-[#166534]">{glyph(icon, "size-7")}</div>
                                <h3 class="mb-3 text-lg font-bold text-gray-900">{title}</h3>
                                <p class="text-sm leading-relaxed text-gray-600">{text}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>

        <section class="px-4 pb-24 mx-auto max-w-7xl">
            <div class="flex flex-col gap-6 justify-between items-start p-10 rounded-3xl md:flex-row md:items-center bg-[#f0f9f4]">
                <div>
                    <h2 class="mb-2 text-2xl font-bold text-[#14532d]">"See it on your own data"</h2>
                    <p class="text-gray-600">"We will set up a tracker on a topic you care about and walk you through the results."</p>
                </div>
                <button
                    class="py-3 px-6 font-semibold text-white rounded-xl transition-colors bg-[#14532d] hover:bg-[#166534]"
                    on:click=move |_| on_demo_request.run(())
                >
                    "Book a walkthrough"
                </button>
            </div>
        </section>
    }
}
