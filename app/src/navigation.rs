//! This module holds the site's view state and the controller that changes it.
//!
//! Every user action is expressed as an [`Action`] and applied by the pure
//! [`transition`] function, which returns the next [`ViewState`] together with
//! the side effects the browser should perform. [`Navigator`] is the reactive
//! shell around that function: it owns the only `ViewState` signal, is provided
//! once through Leptos context, and is the only code path that mutates it.

use core::fmt;
use core::str::FromStr;

use leptos::prelude::*;
use thiserror::Error;

use crate::types::PostId;

/// Top-level pages of the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    About,
    Product,
    Consulting,
    Insights,
    Contact,
    Privacy,
    Terms,
}

impl Section {
    pub const ALL: [Self; 8] = [
        Self::Home,
        Self::About,
        Self::Product,
        Self::Consulting,
        Self::Insights,
        Self::Contact,
        Self::Privacy,
        Self::Terms,
    ];

    /// Sections listed in the header, in display order.
    pub const HEADER: [Self; 6] = [
        Self::Home,
        Self::About,
        Self::Product,
        Self::Consulting,
        Self::Insights,
        Self::Contact,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Product => "Product",
            Self::Consulting => "Consulting",
            Self::Insights => "Insights",
            Self::Contact => "Contact",
            Self::Privacy => "Privacy",
            Self::Terms => "Terms",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown section `{0}`")]
pub struct UnknownSection(pub String);

impl FromStr for Section {
    type Err = UnknownSection;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|section| section.label().eq_ignore_ascii_case(name))
            .ok_or_else(|| UnknownSection(name.to_owned()))
    }
}

/// Where a section selection points: one of the known pages, or a name the
/// site has no page for yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    Known(Section),
    Unknown(String),
}

impl From<Section> for Target {
    fn from(section: Section) -> Self {
        Self::Known(section)
    }
}

impl From<&str> for Target {
    fn from(name: &str) -> Self {
        name.parse::<Section>()
            .map_or_else(|UnknownSection(name)| Self::Unknown(name), Self::Known)
    }
}

/// What the page currently shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ViewState {
    #[default]
    Home,
    About,
    Product,
    Consulting,
    Contact,
    Privacy,
    Terms,
    InsightsList,
    InsightsDetail(PostId),
    UnderConstruction(String),
}

impl ViewState {
    /// The section to highlight; `None` for the under-construction placeholder.
    pub const fn active_section(&self) -> Option<Section> {
        match self {
            Self::Home => Some(Section::Home),
            Self::About => Some(Section::About),
            Self::Product => Some(Section::Product),
            Self::Consulting => Some(Section::Consulting),
            Self::Contact => Some(Section::Contact),
            Self::Privacy => Some(Section::Privacy),
            Self::Terms => Some(Section::Terms),
            Self::InsightsList | Self::InsightsDetail(_) => Some(Section::Insights),
            Self::UnderConstruction(_) => None,
        }
    }

    pub const fn selected_post(&self) -> Option<PostId> {
        match self {
            Self::InsightsDetail(id) => Some(*id),
            _ => None,
        }
    }

    const fn of_section(section: Section) -> Self {
        match section {
            Section::Home => Self::Home,
            Section::About => Self::About,
            Section::Product => Self::Product,
            Section::Consulting => Self::Consulting,
            Section::Insights => Self::InsightsList,
            Section::Contact => Self::Contact,
            Section::Privacy => Self::Privacy,
            Section::Terms => Self::Terms,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SelectSection(Target),
    SelectPost(PostId),
    ClearSelectedPost,
    GoHome,
}

/// Side effects requested by a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Smoothly scroll the window back to the top.
    ScrollToTop,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: ViewState,
    pub effects: Vec<Effect>,
}

/// Applies `action` to `state`.
///
/// Entering Insights through a section selection always lands on the list.
/// Selecting a post switches into Insights from anywhere. Clearing the
/// selection outside the detail view leaves the state as it was.
pub fn transition(state: &ViewState, action: Action) -> Transition {
    let state = match action {
        Action::SelectSection(Target::Known(section)) => ViewState::of_section(section),
        Action::SelectSection(Target::Unknown(name)) => ViewState::UnderConstruction(name),
        Action::SelectPost(id) => ViewState::InsightsDetail(id),
        Action::ClearSelectedPost => match state {
            ViewState::InsightsDetail(_) => ViewState::InsightsList,
            other => other.clone(),
        },
        Action::GoHome => ViewState::Home,
    };

    Transition {
        state,
        effects: vec![Effect::ScrollToTop],
    }
}

/// Reactive owner of the [`ViewState`].
#[derive(Debug, Clone, Copy)]
pub struct Navigator {
    state: RwSignal<ViewState>,
}

impl Navigator {
    pub fn new() -> Self {
        Self::starting_at(ViewState::default())
    }

    pub fn starting_at(state: ViewState) -> Self {
        Self {
            state: RwSignal::new(state),
        }
    }

    /// Tracked read of the current state.
    pub fn state(&self) -> ViewState {
        self.state.get()
    }

    pub fn state_untracked(&self) -> ViewState {
        self.state.get_untracked()
    }

    pub fn is_active(&self, section: Section) -> bool {
        self.state
            .with(|state| state.active_section() == Some(section))
    }

    pub fn selected_post(&self) -> Option<PostId> {
        self.state.with(ViewState::selected_post)
    }

    /// Applies `action`, stores the result and performs its effects.
    pub fn dispatch(&self, action: Action) -> Transition {
        let next = self.state.with_untracked(|state| transition(state, action));
        log::debug!("navigating to {:?}", next.state);
        self.state.set(next.state.clone());
        for effect in &next.effects {
            perform(*effect);
        }
        next
    }

    pub fn select_section(&self, target: impl Into<Target>) {
        self.dispatch(Action::SelectSection(target.into()));
    }

    pub fn select_post(&self, id: PostId) {
        self.dispatch(Action::SelectPost(id));
    }

    pub fn clear_selected_post(&self) {
        self.dispatch(Action::ClearSelectedPost);
    }

    pub fn go_home(&self) {
        self.dispatch(Action::GoHome);
    }

    /// A callback that selects `section`, for components that only need one link.
    pub fn link(self, section: Section) -> Callback<()> {
        Callback::new(move |()| self.select_section(section))
    }

    pub fn home_link(self) -> Callback<()> {
        Callback::new(move |()| self.go_home())
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

/// Creates the site's navigator and makes it available to descendants.
pub fn provide_navigator() -> Navigator {
    let navigator = Navigator::new();
    provide_context(navigator);
    navigator
}

pub fn use_navigator() -> Navigator {
    expect_context::<Navigator>()
}

#[cfg(feature = "hydrate")]
fn perform(effect: Effect) {
    use web_sys::{ScrollBehavior, ScrollToOptions};

    match effect {
        Effect::ScrollToTop => {
            let options = ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(ScrollBehavior::Smooth);
            window().scroll_to_with_scroll_to_options(&options);
        }
    }
}

// There is no window to scroll while rendering on the server.
#[cfg(not(feature = "hydrate"))]
const fn perform(_effect: Effect) {}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use leptos::reactive::owner::Owner;

    fn apply(state: &ViewState, action: Action) -> ViewState {
        transition(state, action).state
    }

    fn every_state() -> Vec<ViewState> {
        vec![
            ViewState::Home,
            ViewState::About,
            ViewState::Product,
            ViewState::Consulting,
            ViewState::Contact,
            ViewState::Privacy,
            ViewState::Terms,
            ViewState::InsightsList,
            ViewState::InsightsDetail(PostId(1)),
            ViewState::UnderConstruction("Careers".to_string()),
        ]
    }

    #[test]
    fn test_initial_state_is_home_without_selection() {
        let state = ViewState::default();
        assert_eq!(state.active_section(), Some(Section::Home));
        assert_eq!(state.selected_post(), None);
    }

    #[test]
    fn test_select_section_activates_it() {
        for start in every_state() {
            for section in Section::ALL {
                let next = apply(&start, Action::SelectSection(section.into()));
                assert_eq!(next.active_section(), Some(section), "from {start:?}");
            }
        }
    }

    #[test]
    fn test_select_insights_clears_selection() {
        for start in every_state() {
            let next = apply(&start, Action::SelectSection(Section::Insights.into()));
            assert_eq!(next, ViewState::InsightsList);
            assert_eq!(next.selected_post(), None);
        }
    }

    #[test]
    fn test_select_post_from_insights() {
        let next = apply(&ViewState::InsightsList, Action::SelectPost(PostId(3)));
        assert_eq!(next.selected_post(), Some(PostId(3)));
        assert_eq!(next.active_section(), Some(Section::Insights));
    }

    #[test]
    fn test_select_post_switches_into_insights() {
        let next = apply(&ViewState::Product, Action::SelectPost(PostId(2)));
        assert_eq!(next, ViewState::InsightsDetail(PostId(2)));
    }

    #[test]
    fn test_clear_selected_post_is_idempotent() {
        for start in every_state() {
            let once = apply(&start, Action::ClearSelectedPost);
            let twice = apply(&once, Action::ClearSelectedPost);
            assert_eq!(once, twice);
            assert_eq!(once.selected_post(), None);
        }
    }

    #[test]
    fn test_clear_selected_post_keeps_other_sections() {
        assert_eq!(apply(&ViewState::About, Action::ClearSelectedPost), ViewState::About);
        assert_eq!(
            apply(&ViewState::InsightsDetail(PostId(9)), Action::ClearSelectedPost),
            ViewState::InsightsList
        );
    }

    #[test]
    fn test_go_home_from_anywhere() {
        for start in every_state() {
            let next = apply(&start, Action::GoHome);
            assert_eq!(next, ViewState::Home);
            assert_eq!(next.selected_post(), None);
        }
    }

    #[test]
    fn test_every_transition_scrolls_to_top() {
        let actions = [
            Action::SelectSection(Section::About.into()),
            Action::SelectSection("Careers".into()),
            Action::SelectPost(PostId(1)),
            Action::ClearSelectedPost,
            Action::GoHome,
        ];
        for start in every_state() {
            for action in actions.clone() {
                assert_eq!(transition(&start, action).effects, vec![Effect::ScrollToTop]);
            }
        }
    }

    #[test]
    fn test_unknown_name_leads_to_placeholder() {
        let next = apply(&ViewState::Home, Action::SelectSection("Careers".into()));
        assert_eq!(next, ViewState::UnderConstruction("Careers".to_string()));
        assert_eq!(next.active_section(), None);
    }

    #[test]
    fn test_section_names_parse_case_insensitively() {
        assert_eq!("Insights".parse::<Section>(), Ok(Section::Insights));
        assert_eq!(" insights ".parse::<Section>(), Ok(Section::Insights));
        assert_eq!("TERMS".parse::<Section>(), Ok(Section::Terms));
        assert_matches!("Blog".parse::<Section>(), Err(UnknownSection(name)) if name == "Blog");
    }

    #[test]
    fn test_labels_round_trip_through_target() {
        for section in Section::ALL {
            assert_eq!(Target::from(section.label()), Target::Known(section));
            assert_eq!(section.to_string(), section.label());
        }
    }

    #[test]
    fn test_header_omits_legal_pages() {
        assert!(!Section::HEADER.contains(&Section::Privacy));
        assert!(!Section::HEADER.contains(&Section::Terms));
        assert_eq!(Section::HEADER[0], Section::Home);
        assert_eq!(Section::HEADER[4], Section::Insights);
    }

    #[test]
    fn test_navigator_dispatch_updates_signal() {
        let owner = Owner::new();
        owner.with(|| {
            let nav = Navigator::new();
            assert_eq!(nav.state_untracked(), ViewState::Home);

            nav.select_section(Section::Insights);
            nav.select_post(PostId(4));
            assert_eq!(nav.state_untracked(), ViewState::InsightsDetail(PostId(4)));

            let transition = nav.dispatch(Action::ClearSelectedPost);
            assert_eq!(transition.state, ViewState::InsightsList);
            assert_eq!(nav.state_untracked(), ViewState::InsightsList);

            nav.go_home();
            assert_eq!(nav.state_untracked(), ViewState::Home);
        });
    }

    #[test]
    fn test_navigator_link_callback() {
        let owner = Owner::new();
        owner.with(|| {
            let nav = Navigator::starting_at(ViewState::Product);
            nav.link(Section::Contact).run(());
            assert_eq!(nav.state_untracked(), ViewState::Contact);
        });
    }

    #[test]
    fn test_navigator_home_link_callback() {
        let owner = Owner::new();
        owner.with(|| {
            let nav = Navigator::starting_at(ViewState::UnderConstruction("Careers".into()));
            nav.home_link().run(());
            assert_eq!(nav.state_untracked(), ViewState::Home);
        });
    }

    #[test]
    fn test_navigator_is_shared_through_context() {
        let owner = Owner::new();
        owner.with(|| {
            let provided = provide_navigator();
            let used = use_navigator();
            used.select_section("About");
            assert_eq!(provided.state_untracked(), ViewState::About);
        });
    }
}
