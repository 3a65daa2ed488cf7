//! End-to-end navigation flows driven through the public `Navigator` API.

use app::content::posts;
use app::navigation::{Action, Effect, Navigator, Section, ViewState, provide_navigator, use_navigator};
use assert_matches::assert_matches;
use leptos::prelude::*;
use leptos::reactive::owner::Owner;

#[cfg(test)]
mod navigation_scenarios {
    use super::*;

    fn with_navigator(run: impl FnOnce(Navigator)) {
        let owner = Owner::new();
        owner.with(|| run(provide_navigator()));
    }

    #[test]
    fn test_reading_a_post_and_returning_to_the_list() {
        with_navigator(|nav| {
            assert_eq!(nav.state_untracked(), ViewState::Home);

            nav.select_section(Section::Insights);
            assert_eq!(nav.state_untracked(), ViewState::InsightsList);
            assert!(nav.is_active(Section::Insights));

            let first = posts()[0].id;
            nav.select_post(first);
            assert_eq!(nav.state_untracked(), ViewState::InsightsDetail(first));
            assert_eq!(nav.selected_post(), Some(first));

            nav.clear_selected_post();
            assert_eq!(nav.state_untracked(), ViewState::InsightsList);
            assert!(nav.is_active(Section::Insights));
            assert_eq!(nav.selected_post(), None);
        });
    }

    #[test]
    fn test_demo_request_from_product_opens_contact() {
        with_navigator(|nav| {
            nav.select_section(Section::Product);
            assert!(nav.is_active(Section::Product));

            let request_demo = nav.link(Section::Contact);
            request_demo.run(());

            assert_eq!(nav.state_untracked(), ViewState::Contact);
            assert!(nav.is_active(Section::Contact));
            assert!(!nav.is_active(Section::Product));
        });
    }

    #[test]
    fn test_unknown_section_shows_placeholder_until_home() {
        with_navigator(|nav| {
            nav.select_section("Careers");
            assert_matches!(nav.state_untracked(), ViewState::UnderConstruction(name) if name == "Careers");
            assert_eq!(nav.state_untracked().active_section(), None);

            nav.go_home();
            assert_eq!(nav.state_untracked(), ViewState::Home);
            assert!(nav.is_active(Section::Home));
        });
    }

    #[test]
    fn test_section_names_resolve_case_insensitively() {
        with_navigator(|nav| {
            nav.select_section("insights");
            assert_eq!(nav.state_untracked(), ViewState::InsightsList);

            nav.select_section(" Terms ");
            assert_eq!(nav.state_untracked(), ViewState::Terms);
        });
    }

    #[test]
    fn test_context_navigator_is_shared() {
        with_navigator(|nav| {
            let from_context = use_navigator();
            from_context.select_section(Section::About);
            assert_eq!(nav.state_untracked(), ViewState::About);
        });
    }

    #[test]
    fn test_every_dispatch_scrolls_to_top_once() {
        with_navigator(|nav| {
            let actions = [
                Action::SelectSection(Section::Consulting.into()),
                Action::SelectPost(posts()[1].id),
                Action::ClearSelectedPost,
                Action::ClearSelectedPost,
                Action::GoHome,
            ];
            for action in actions {
                let transition = nav.dispatch(action);
                assert_eq!(transition.effects, vec![Effect::ScrollToTop]);
                assert_eq!(transition.state, nav.state_untracked());
            }
        });
    }

    #[test]
    fn test_every_post_can_be_opened_from_anywhere() {
        with_navigator(|nav| {
            for section in Section::ALL {
                for post in posts() {
                    nav.select_section(section);
                    nav.select_post(post.id);
                    assert!(nav.is_active(Section::Insights));
                    assert_eq!(nav.selected_post(), Some(post.id));
                }
            }
        });
    }
}
