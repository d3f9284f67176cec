//! Shared presentational components used by the route pages.

pub mod confirm_dialog;
pub mod layout;
pub mod post_card;
