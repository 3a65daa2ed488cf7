#![recursion_limit = "256"]

// Core application modules and components
use crate::components::{error_template, footer, header, placeholder};
use crate::legal::LegalKind;
use crate::navigation::{Section, ViewState, provide_navigator, use_navigator};
use leptos::{
    html::{body, head, html, link, meta},
    prelude::*,
};
use leptos_meta::{MetaTags, Stylesheet, StylesheetProps, Title, TitleProps, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{FlatRoutes, Route, Router},
};

mod about;
mod components;
mod consulting;
pub mod contact;
pub mod content;
mod home;
mod insights;
pub mod legal;
pub mod navigation;
mod post;
mod product;
pub mod types;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let html_comp = html().lang("en").child((
        head().child((
            meta().charset("utf-8"),
            meta()
                .name("viewport")
                .content("width=device-width, initial-scale=1"),
            meta()
                .name("description")
                .content("SentiNEX helps teams understand public sentiment in Nigeria through data-aware insights."),
            link().rel("icon").r#type("image/svg+xml").href("/favicon.svg"),
            HydrationScripts(HydrationScriptsProps::builder().options(options).build()),
            MetaTags(),
            Stylesheet(
                StylesheetProps::builder()
                    .id("leptos")
                    .href("/pkg/sentinex.css")
                    .build(),
            ),
            Title(
                TitleProps::builder()
                    .text("SentiNEX \u{2013} Clear Insight for Nigeria")
                    .build(),
            ),
        )),
        body().class("bg-[#fafafa]").child(self::component),
    ));

    view! {
        <!DOCTYPE html>
        {html_comp}
    }
}

#[must_use]
pub fn component() -> impl IntoView {
    provide_navigator();

    view! {
        <Router>
            <div class="min-h-screen font-sans text-gray-900 bg-[#fafafa]">
                {header::component}
                <FlatRoutes fallback=|| {
                    let mut outside_errors = Errors::default();
                    outside_errors.insert_with_default_key(error_template::AppError::NotFound);
                    error_template::component(Some(outside_errors), None)
                }>
                    <Route path=StaticSegment("") view=page/>
                </FlatRoutes>
                {footer::component}
            </div>
        </Router>
    }
}

/// Swaps in the page for the current view state.
fn page() -> impl IntoView {
    let nav = use_navigator();
    let go_home = nav.home_link();

    move || match nav.state() {
        ViewState::Home => home::component(
            nav.link(Section::Contact),
            nav.link(Section::Product),
            nav.link(Section::Consulting),
        )
        .into_any(),
        ViewState::About => about::component().into_any(),
        ViewState::Product => product::component(nav.link(Section::Contact)).into_any(),
        ViewState::Consulting => consulting::component(nav.link(Section::Contact)).into_any(),
        ViewState::Contact => contact::component().into_any(),
        ViewState::Privacy => legal::component(LegalKind::Privacy, go_home).into_any(),
        ViewState::Terms => legal::component(LegalKind::Terms, go_home).into_any(),
        ViewState::InsightsList => insights::component(None).into_any(),
        ViewState::InsightsDetail(id) => insights::component(Some(id)).into_any(),
        ViewState::UnderConstruction(name) => placeholder::component(name, go_home).into_any(),
    }
}
