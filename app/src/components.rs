//! This module serves as a container for the reusable UI pieces used across the site.
//!
//! Each sub-module defines one element: the header and footer chrome, icons and
//! the logo, the Insights card and sidebar, the under-construction placeholder,
//! and the error page.

pub mod blog_card;
pub mod error_template;
pub mod footer;
pub mod header;
pub mod icons;
pub mod placeholder;
pub mod sidebar;
