//! Site footer: brand blurb, company links, contact details and legal links.

use chrono::{Datelike as _, Utc};
use leptos::{
    ev,
    html::{a, button, div, footer, h4, li, p, span, ul},
    prelude::*,
};

use crate::components::icons;
use crate::navigation::{Navigator, Section, use_navigator};

pub const CONTACT_EMAIL: &str = "info@sentinex.co";

fn section_link(nav: Navigator, section: Section, label: &'static str) -> impl IntoView {
    li().child(
        button()
            .on(ev::click, move |_| nav.select_section(section))
            .class("text-left text-gray-300 transition-colors hover:text-white")
            .child(label),
    )
}

pub fn component() -> impl IntoView {
    let nav = use_navigator();

    footer().class("pt-20 pb-10 text-white bg-[#14532d]").child(
        div().class("px-4 mx-auto max-w-7xl").child((
            div().class("grid grid-cols-1 gap-12 mb-20 md:grid-cols-12").child((
                div().class("space-y-6 md:col-span-5").child((
                    icons::footer_logo(),
                    p().class("max-w-sm text-base leading-relaxed text-gray-300").child(
                        "Clear insight for Nigeria. SentiNEX helps teams understand public sentiment through data-aware insights, transforming noise into actionable strategy.",
                    ),
                    p().class("text-sm font-medium text-[#fbbf24]")
                        .child("Built for Nigeria with care."),
                )),
                div().class("space-y-6 md:col-span-3").child((
                    h4().class("text-lg font-bold").child("Company"),
                    ul().class("space-y-4").child((
                        section_link(nav, Section::About, "About Us"),
                        section_link(nav, Section::Product, "Platform"),
                        section_link(nav, Section::Consulting, "Consulting"),
                        li().class("flex gap-2 items-center").child((
                            span().class("text-gray-300").child("Careers"),
                            span()
                                .class("py-0.5 px-1.5 rounded border bg-white/10 text-[10px] border-white/10 text-white/60")
                                .child("Future"),
                        )),
                    )),
                )),
                div().class("space-y-6 md:col-span-4").child((
                    h4().class("text-lg font-bold").child("Contact"),
                    ul().class("space-y-5").child((
                        li().class("flex gap-3 items-center text-gray-300").child((
                            icons::email(),
                            a().href(format!("mailto:{CONTACT_EMAIL}"))
                                .class("transition-colors hover:text-white")
                                .child(CONTACT_EMAIL),
                        )),
                        li().class("flex gap-3 items-center text-gray-300").child((
                            icons::location(),
                            span().child("Lagos, Nigeria"),
                        )),
                    )),
                    div().class("pt-4").child(
                        button()
                            .on(ev::click, move |_| nav.select_section(Section::Contact))
                            .class("py-2.5 px-6 text-sm font-medium rounded-lg border transition-colors border-white/20 hover:bg-white/5")
                            .child("Get in touch"),
                    ),
                )),
            )),
            div().class("flex flex-col gap-6 justify-between items-center pt-10 border-t md:flex-row border-white/10").child((
                div().class("text-sm text-gray-400")
                    .child(format!("\u{a9} {} SentiNEX. All rights reserved.", Utc::now().year())),
                div().class("flex gap-8 text-sm text-gray-400").child((
                    button()
                        .on(ev::click, move |_| nav.select_section(Section::Privacy))
                        .class("transition-colors hover:text-white")
                        .child("Privacy Policy"),
                    button()
                        .on(ev::click, move |_| nav.select_section(Section::Terms))
                        .class("transition-colors hover:text-white")
                        .child("Terms of Service"),
                )),
            )),
        )),
    )
}
