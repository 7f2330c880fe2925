//! Client-side view state.
//!
//! DESIGN
//! ======
//! Each module is a plain data model owned by the dispatcher. Components read
//! mirrors of these values through signals and never write them directly.

pub mod notification;
pub mod roster_view;
pub mod signup_form;
