//! User interface components.
//!
//! The chat view lives in `home`; everything else is a piece it composes.

mod chat_input;    // Text box + send button
pub mod home;      // Chat view (public for routing)
mod message;       // Bubble and typing placeholder
pub mod settings;  // Settings panel (public for routing)
mod slideout;
mod status_badge;  // Backend health indicator
mod top_k_select;
