//! Networking modules for the roster HTTP endpoints and push channel.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles the snapshot fetch and signup POST, `push_channel` owns the
//! reconnect state machine and the browser WebSocket task, and `types`
//! defines the wire schema shared by both.

pub mod api;
pub mod push_channel;
pub mod types;
