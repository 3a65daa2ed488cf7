//! Stand-in page for section names the site has no page for yet.

use leptos::{
    ev,
    html::{button, div, h2, p},
    prelude::*,
};

/// Renders "`name` Page" with a note that it is under development and a
/// control that runs `on_home`.
pub fn component(name: String, on_home: Callback<()>) -> impl IntoView {
    div().class("py-32 px-4 mx-auto max-w-7xl text-center").child((
        h2().class("text-3xl font-bold text-[#14532d]").child(format!("{name} Page")),
        p().class("mt-4 text-gray-500").child("This section is currently under development."),
        button()
            .on(ev::click, move |_| on_home.run(()))
            .class("mt-8 font-bold underline text-[#14532d]")
            .child("Back to Home"),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::{Navigator, ViewState};
    use leptos::reactive::owner::Owner;

    #[test]
    fn test_renders_name_and_home_control() {
        let owner = Owner::new();
        owner.with(|| {
            let nav = Navigator::starting_at(ViewState::UnderConstruction("Careers".into()));
            let html = component("Careers".into(), nav.home_link()).to_html();
            assert!(html.contains("Careers Page"));
            assert!(html.contains("This section is currently under development."));
            assert!(html.contains("Back to Home"));
        });
    }
}
