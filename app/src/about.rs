use leptos::prelude::*;
use leptos_meta::Title;

pub fn component() -> impl IntoView {
    let values = [
        ("Local first", "Our models and our analysts start from Nigerian language and context, not translations of someone else's."),
        ("Honest numbers", "Every figure we report comes with its confidence and its limits."),
        ("Public, not personal", "We study public conversation in aggregate. We do not profile individuals."),
    ];

    view! {
        <Title text="About \u{2013} SentiNEX"/>
        <section class="bg-white border-b border-gray-50">
            <div class="py-20 px-4 mx-auto max-w-7xl">
                <span class="block mb-4 text-xs font-bold tracking-widest uppercase text-[#166534]">"About us"</span>
                <h1 class="mb-6 max-w-3xl text-5xl font-bold tracking-tight text-[#166534]">
                    "We help Nigeria hear itself clearly."
                </h1>
                <p class="max-w-2xl text-lg leading-relaxed text-gray-600">
                    "SentiNEX was founded in Lagos by data scientists and communications professionals who were tired of reading Nigerian conversation through foreign tools. We build sentiment technology that understands how people here actually speak, and we pair it with analysts who know what it means."
                </p>
            </div>
        </section>

        <section class="grid grid-cols-1 gap-8 py-20 px-4 mx-auto max-w-7xl md:grid-cols-3">
            {values
                .into_iter()
                .map(|(title, text)| {
                    view! {
                        <div class="p-8 bg-white rounded-3xl border border-gray-100">
                            <h2 class="mb-3 text-xl font-bold text-[#14532d]">{title}</h2>
                            <p class="leading-relaxed text-gray-600">{text}</p>
                        </div>
                    }
                })
                .collect_view()}
        </section>

        <section class="px-4 pb-24 mx-auto max-w-7xl">
            <div class="p-10 text-white rounded-3xl bg-[#14532d]">
                <h2 class="mb-3 text-2xl font-bold">"Our mission"</h2>
                <p class="max-w-3xl leading-relaxed text-gray-300">
                    "To give every organisation that serves Nigerians a clear, fair and timely picture of how those Nigerians feel."
                </p>
            </div>
        </section>
    }
}
