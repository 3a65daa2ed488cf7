//! This module defines the `contact` component, which renders the contact page
//! of the site.
//!
//! The page lists the ways to reach the SentiNEX team. There is no form to
//! submit: every channel is a plain link handled by the visitor's own client.

use icondata::{FiClock, FiMail, FiMapPin};
use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::{footer::CONTACT_EMAIL, icons::glyph};

/// Pre-filled `mailto:` link for a given enquiry subject.
pub fn mailto(subject: &str) -> String {
    format!("mailto:{CONTACT_EMAIL}?subject={}", subject.replace(' ', "%20"))
}

/// Renders the contact page.
pub fn component() -> impl IntoView {
    let enquiries = [
        ("Request a demo", "See the platform on a topic you care about."),
        ("Consulting enquiry", "Tell us about a campaign, crisis or study."),
        ("Press", "Interviews, data requests and commentary."),
    ];

    view! {
        <Title text="Contact \u{2013} SentiNEX"/>
        <section class="bg-white border-b border-gray-50">
            <div class="py-20 px-4 mx-auto max-w-7xl">
                <span class="block mb-4 text-xs font-bold tracking-widest uppercase text-[#166534]">"Contact"</span>
                <h1 class="mb-6 max-w-3xl text-5xl font-bold tracking-tight text-[#166534]">"Let's talk."</h1>
                <p class="max-w-2xl text-lg text-gray-600">
                    "Whether you want a demo, a study or just to ask a question, we usually reply within one working day."
                </p>
            </div>
        </section>

        <section class="grid grid-cols-1 gap-12 py-20 px-4 mx-auto max-w-7xl lg:grid-cols-3">
            <div class="space-y-6 lg:col-span-2">
                {enquiries
                    .into_iter()
                    .map(|(subject, text)| {
                        view! {
                            <a
                                href=mailto(subject)
                                class="block p-8 bg-white rounded-3xl border border-gray-100 transition-all hover:shadow-md hover:border-[#166534]/30"
                            >
                                <h2 class="mb-2 text-xl font-bold text-gray-900">{subject}</h2>
                                <p class="text-gray-600">{text}</p>
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
            <aside class="p-8 space-y-6 text-white rounded-3xl bg-[#14532d]">
                <div class="flex gap-3 items-start">
                    {glyph(FiMail, "mt-0.5 size-5 text-[#fbbf24]")}
                    <a href=format!("mailto:{CONTACT_EMAIL}") class="hover:underline">{CONTACT_EMAIL}</a>
                </div>
                <div class="flex gap-3 items-start">
                    {glyph(FiMapPin, "mt-0.5 size-5 text-[#fbbf24]")}
                    <span>"Lagos, Nigeria"</span>
                </div>
                <div class="flex gap-3 items-start">
                    {glyph(FiClock, "mt-0.5 size-5 text-[#fbbf24]")}
                    <span>"Monday to Friday, 9am \u{2013} 5pm WAT"</span>
                </div>
            </aside>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mailto_encodes_spaces() {
        assert_eq!(
            mailto("Request a demo"),
            "mailto:info@sentinex.co?subject=Request%20a%20demo"
        );
    }
}
