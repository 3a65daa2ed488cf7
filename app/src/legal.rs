//! Privacy Policy and Terms of Service, rendered by one component.

use leptos::prelude::*;
use leptos_meta::Title;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegalKind {
    Privacy,
    Terms,
}

impl LegalKind {
    pub const fn title(self) -> &'static str {
        match self {
            Self::Privacy => "Privacy Policy",
            Self::Terms => "Terms of Service",
        }
    }

    /// Clauses as (heading, text) pairs.
    pub const fn clauses(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Self::Privacy => &[
                ("What we collect", "This website does not use accounts or tracking cookies. If you email us, we keep your message and address to reply to you."),
                ("Public data we analyse", "Our platform analyses publicly available conversation and reports it in aggregate. We do not build profiles of individuals."),
                ("How we share data", "We never sell personal information. Client reports contain aggregated figures only."),
                ("Your rights", "You can ask us what we hold about you, or ask us to delete it, by writing to info@sentinex.co."),
            ],
            Self::Terms => &[
                ("Use of this site", "The content on this website is provided for general information. It is not professional advice."),
                ("Insights articles", "Figures quoted in Insights articles reflect our analysis at the time of publication and may be revised."),
                ("Intellectual property", "Text, graphics and reports on this site belong to SentiNEX unless stated otherwise. You may quote short passages with attribution."),
                ("Governing law", "These terms are governed by the laws of the Federal Republic of Nigeria."),
            ],
        }
    }
}

/// Renders the document for `kind`. `on_back` runs from the "Back to Home" control.
pub fn component(kind: LegalKind, on_back: Callback<()>) -> impl IntoView {
    view! {
        <Title text=format!("{} \u{2013} SentiNEX", kind.title())/>
        <section class="py-20 px-4 mx-auto max-w-3xl">
            <button
                class="mb-10 text-sm font-semibold underline text-[#14532d]"
                on:click=move |_| on_back.run(())
            >
                "Back to Home"
            </button>
            <h1 class="mb-4 text-4xl font-bold tracking-tight text-[#14532d]">{kind.title()}</h1>
            <p class="mb-12 text-sm text-gray-400">"Last updated: January 2025"</p>
            <div class="space-y-10">
                {kind
                    .clauses()
                    .iter()
                    .map(|(heading, text)| {
                        view! {
                            <div>
                                <h2 class="mb-3 text-xl font-bold text-gray-900">{*heading}</h2>
                                <p class="leading-relaxed text-gray-600">{*text}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
