//! UI components for the roster page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read state through the [`crate::runtime::ViewSignals`] context
//! and report user actions through the [`crate::runtime::Dispatch`] context.
//! None of them write state directly.

pub mod activity_card;
pub mod connection_badge;
pub mod notification_banner;
pub mod roster_list;
pub mod signup_form;
