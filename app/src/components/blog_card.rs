//! A clickable summary of one Insights post, as shown in the list view.

use icondata::{BsCalendar, BsClock, FiArrowRight, FiUser};
use leptos::{
    ev,
    html::{article, div, h2, img, p, span},
    prelude::*,
};

use crate::components::icons::glyph;
use crate::types::{Post, PostId};

/// Renders `post` as a card. The first card in the list is `featured`: it is
/// larger and shows the header image when the post has one.
pub fn component(post: &'static Post, featured: bool, on_select: Callback<PostId>) -> impl IntoView {
    let id = post.id;
    let card_class = if featured {
        "overflow-hidden bg-white rounded-3xl border shadow-sm transition-all duration-300 cursor-pointer group border-[#166534]/20 hover:shadow-lg"
    } else {
        "overflow-hidden bg-white rounded-2xl border border-gray-100 transition-all duration-300 cursor-pointer group hover:border-[#166534]/30 hover:shadow-md"
    };
    let title_class = if featured {
        "text-3xl font-bold leading-tight transition-colors text-gray-900 group-hover:text-[#166534]"
    } else {
        "text-xl font-bold leading-snug transition-colors text-gray-900 group-hover:text-[#166534]"
    };

    article()
        .class(card_class)
        .on(ev::click, move |_| on_select.run(id))
        .child((
            post.header_image
                .as_deref()
                .filter(|_| featured)
                .map(|src| img().src(src).alt(post.title.as_str()).class("object-cover w-full h-64")),
            div().class("p-8 space-y-4").child((
                div().class("flex gap-3 items-center").child((
                    span()
                        .class("py-1 px-3 text-xs font-semibold tracking-wide uppercase rounded-full text-[#166534] bg-[#f0f9f4]")
                        .child(post.category.as_str()),
                    featured.then(|| {
                        span()
                            .class("text-xs font-bold tracking-widest uppercase text-[#b45309]")
                            .child("Latest")
                    }),
                )),
                h2().class(title_class).child(post.title.as_str()),
                p().class("leading-relaxed text-gray-600").child(post.excerpt.as_str()),
                div().class("flex flex-wrap gap-5 items-center pt-2 text-xs text-gray-500").child((
                    div().class("flex gap-1.5 items-center").child((
                        glyph(FiUser, "size-4"),
                        span().class("font-semibold text-gray-700").child(post.author.name.as_str()),
                    )),
                    div().class("flex gap-1.5 items-center").child((
                        glyph(BsCalendar, "size-3.5"),
                        span().child(post.display_date()),
                    )),
                    div().class("flex gap-1.5 items-center").child((
                        glyph(BsClock, "size-3.5"),
                        span().child(format!("{} min read", post.read_time())),
                    )),
                    div().class("flex gap-1 items-center ml-auto font-semibold text-[#166534]").child((
                        span().child("Read more"),
                        glyph(FiArrowRight, "size-4 transition-transform group-hover:translate-x-1"),
                    )),
                )),
            )),
        ))
}
