//! Icon glyphs and the SentiNEX logo.

use icondata::{FiActivity, FiMail, FiMapPin, Icon};
use leptos::{
    html::{div, span},
    prelude::*,
    svg::svg,
};

/// Renders an `icondata` icon as an inline SVG that inherits the text colour.
pub fn glyph(icon: Icon, class: &'static str) -> impl IntoView {
    svg()
        .attr("viewBox", icon.view_box)
        .attr("fill", icon.fill.unwrap_or("currentColor"))
        .attr("stroke", icon.stroke)
        .attr("stroke-width", icon.stroke_width)
        .attr("stroke-linecap", icon.stroke_linecap)
        .attr("stroke-linejoin", icon.stroke_linejoin)
        .attr("aria-hidden", "true")
        .class(class)
        .inner_html(icon.data)
}

/// The wordmark with its badge. Colours are passed in so the same logo works
/// on the white header and the green footer.
pub fn logo(text_class: &'static str, badge_class: &'static str) -> impl IntoView {
    div().class("flex gap-3 items-center select-none").child((
        div()
            .class(format!(
                "flex justify-center items-center rounded-xl size-11 {badge_class}"
            ))
            .child(glyph(FiActivity, "size-6 text-[#fbbf24]")),
        div().class("flex flex-col leading-none").child((
            span()
                .class(format!("text-2xl font-extrabold tracking-tight {text_class}"))
                .child("SentiNEX"),
            span()
                .class("mt-1 text-[10px] font-semibold tracking-[0.25em] uppercase text-gray-400")
                .child("Sentiment Intelligence"),
        )),
    ))
}

pub fn header_logo() -> impl IntoView {
    logo("text-[#14532d]", "bg-[#14532d]")
}

pub fn footer_logo() -> impl IntoView {
    logo("text-white", "bg-white/10 border border-white/20")
}

pub fn email() -> impl IntoView {
    glyph(FiMail, "size-5 shrink-0")
}

pub fn location() -> impl IntoView {
    glyph(FiMapPin, "size-5 shrink-0")
}
