use crate::components::icons;
use crate::navigation::{Section, use_navigator};
use leptos::prelude::*;

const ACTIVE: &str = "relative text-sm font-medium transition-all duration-300 py-2.5 px-6 rounded-xl flex flex-col items-center text-[#166534] bg-[#f0f9f4]";
const IDLE: &str = "relative text-sm font-medium transition-all duration-300 py-2.5 px-6 rounded-xl flex flex-col items-center text-gray-500 hover:text-gray-900";

pub fn component() -> impl IntoView {
    let nav = use_navigator();

    view! {
        <header class="sticky top-0 z-50 bg-white border-b border-gray-100">
            <div class="flex justify-between items-center px-4 mx-auto max-w-7xl h-24">
                <button class="cursor-pointer" aria-label="SentiNEX home" on:click=move |_| nav.go_home()>
                    {icons::header_logo()}
                </button>
                <nav class="hidden gap-1 items-center md:flex">
                    {Section::HEADER
                        .into_iter()
                        .map(|section| {
                            view! {
                                <button
                                    class=move || if nav.is_active(section) { ACTIVE } else { IDLE }
                                    on:click=move |_| nav.select_section(section)
                                >
                                    {section.label()}
                                    <Show when=move || nav.is_active(section)>
                                        <span class="absolute bottom-1 w-1.5 h-1.5 rounded-full bg-[#166534]"></span>
                                    </Show>
                                </button>
                            }
                        })
                        .collect_view()}
                </nav>
            </div>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::{Navigator, ViewState};
    use leptos::reactive::owner::Owner;

    fn render(state: ViewState) -> String {
        let owner = Owner::new();
        owner.with(|| {
            provide_context(Navigator::starting_at(state));
            component().to_html()
        })
    }

    /// Label of the button that carries `class`, in render order.
    fn labels_with(html: &str, class: &str) -> Vec<String> {
        html.split(&format!(r#"class="{class}""#))
            .skip(1)
            .filter_map(|rest| {
                let text = rest.split_once('>')?.1;
                let label = text.split('<').next()?;
                Some(label.trim().to_owned())
            })
            .collect()
    }

    #[test]
    fn test_only_active_section_is_highlighted() {
        let html = render(ViewState::Contact);
        assert_eq!(labels_with(&html, ACTIVE), vec!["Contact".to_owned()]);
        assert_eq!(labels_with(&html, IDLE).len(), Section::HEADER.len() - 1);
        assert!(!labels_with(&html, IDLE).contains(&"Contact".to_owned()));
    }

    #[test]
    fn test_detail_view_highlights_insights() {
        let html = render(ViewState::InsightsDetail(crate::types::PostId(1)));
        assert_eq!(labels_with(&html, ACTIVE), vec!["Insights".to_owned()]);
    }

    #[test]
    fn test_legal_pages_highlight_nothing() {
        let html = render(ViewState::Privacy);
        assert!(labels_with(&html, ACTIVE).is_empty());
        assert_eq!(labels_with(&html, IDLE).len(), Section::HEADER.len());
    }
}
