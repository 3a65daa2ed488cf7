//! This module defines the `error_template` component, which provides a standardized
//! way to display error messages within the Leptos application.
//!
//! It includes an `AppError` enum for application-level errors (e.g., Not Found)
//! and a component that renders a user-friendly error page, setting the appropriate
//! HTTP status code on the server.

use http::status::StatusCode;
use icondata::FiArrowLeft;
use leptos::{
    html::{a, div, h1},
    prelude::*,
};
use thiserror::Error;

use crate::components::icons::glyph;

#[derive(Clone, Debug, Error)]
pub enum AppError {
    #[error("Not Found")]
    NotFound,
}

impl AppError {
    /// Returns the HTTP status code associated with the error.
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

/// Renders a generic error page based on the provided errors.
///
/// This component is used as the router fallback. It extracts `AppError`
/// instances from the `Errors` it is given and displays them. On the server it
/// also sets the HTTP response status code from the first `AppError`.
///
/// # Arguments
///
/// * `outside_errors` - Errors passed from outside the component, typically
///   from a server-side rendering context.
/// * `errors` - A signal with errors managed reactively on the client.
pub fn component(
    outside_errors: Option<Errors>,
    errors: Option<RwSignal<Errors>>,
) -> impl IntoView {
    // Prefer `outside_errors` for SSR, otherwise use the client-side signal.
    let errors = outside_errors
        .map(RwSignal::new)
        .or(errors)
        .map(|errors| {
            errors
                .get_untracked()
                .into_iter()
                .filter_map(|(_k, v)| v.downcast_ref::<AppError>().cloned())
                .collect::<Vec<_>>()
        })
        .unwrap_or_default();

    #[cfg(feature = "ssr")]
    {
        use leptos_axum::ResponseOptions;
        if let (Some(response), Some(first)) = (use_context::<ResponseOptions>(), errors.first()) {
            response.set_status(first.status_code());
        }
    }

    div().class("grid place-content-center py-32 px-4 antialiased").child((
        h1().class("mb-6 text-3xl font-bold text-center text-[#14532d]")
            .child(if errors.len() > 1 { "Errors" } else { "Error" }),
        For(
            ForProps::builder()
                .each(move || errors.clone().into_iter().enumerate())
                .key(|(index, _error)| *index)
                .children(|(_, error)| {
                    div().class("flex flex-col gap-1 justify-center items-center").child((
                        h1().class("text-xl tracking-widest text-gray-400 uppercase")
                            .child(format!("{}| {error}", error.status_code())),
                        a().href("/")
                            .class("flex gap-1 items-center mt-6 font-semibold duration-200 text-[#166534] hover:text-[#14532d]")
                            .child((glyph(FiArrowLeft, "size-4"), "Go back home")),
                    ))
                })
                .build(),
        ),
    ))
}
