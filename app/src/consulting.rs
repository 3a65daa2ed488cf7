//! The Consulting page: research and advisory services delivered by SentiNEX analysts.

use leptos::prelude::*;
use leptos_meta::Title;

struct Service {
    title: &'static str,
    summary: &'static str,
    deliverables: [&'static str; 3],
}

const SERVICES: [Service; 3] = [
    Service {
        title: "Campaign & launch tracking",
        summary: "Measure how audiences receive a campaign, product launch or policy announcement from day one.",
        deliverables: ["Baseline study", "Daily pulse during launch", "Post-campaign review"],
    },
    Service {
        title: "Crisis response support",
        summary: "When conversation turns against you, our analysts tell you what people are upset about and how it is evolving.",
        deliverables: ["24/7 monitoring", "Theme breakdowns within hours", "Message testing"],
    },
    Service {
        title: "Custom research",
        summary: "Bespoke studies on public opinion for institutions, NGOs and media organisations.",
        deliverables: ["Research design", "Regional and language analysis", "Board-ready report"],
    },
];

/// Renders the Consulting page. `on_contact` runs from the call to action.
pub fn component(on_contact: Callback<()>) -> impl IntoView {
    view! {
        <Title text="Consulting \u{2013} SentiNEX"/>
        <section class="bg-white border-b border-gray-50">
            <div class="py-20 px-4 mx-auto max-w-7xl">
                <span class="block mb-4 text-xs font-bold tracking-widest uppercase text-[#166534]">"Consulting"</span>
                <h1 class="mb-6 max-w-3xl text-5xl font-bold tracking-tight text-[#166534]">
                    "Analysts who know the context."
                </h1>
                <p class="max-w-2xl text-lg text-gray-600">
                    "Data tells you what is happening. Our team tells you why, and what to do about it."
                </p>
            </div>
        </section>

        <section class="py-20 px-4 mx-auto space-y-8 max-w-7xl">
            {SERVICES
                .iter()
                .map(|service| {
                    view! {
                        <div class="grid grid-cols-1 gap-8 p-10 bg-white rounded-3xl border border-gray-100 md:grid-cols-3">
                            <div class="md:col-span-2">
                                <h2 class="mb-3 text-2xl font-bold text-gray-900">{service.title}</h2>
                                <p class="leading-relaxed text-gray-600">{service.summary}</p>
                            </div>
                            <ul class="space-y-2 text-sm text-gray-700">
                                {service
                                    .deliverables
                                    .iter()
                                    .map(|item| view! { <li class="pl-3 border-l-2 border-[#fbbf24]">{*item}</li> })
                                    .collect_view()}
                            </ul>
                        </div>
                    }
                })
                .collect_view()}
        </section>

        <section class="px-4 pb-24 mx-auto max-w-7xl text-center">
            <h2 class="mb-4 text-3xl font-bold text-[#14532d]">"Have a question we can help answer?"</h2>
            <button
                class="py-4 px-8 mt-4 font-semibold text-white rounded-xl transition-colors bg-[#166534] hover:bg-[#14532d]"
                on:click=move |_| on_contact.run(())
            >
                "Talk to us"
            </button>
        </section>
    }
}
