//! Top-level application state.
//!
//! One `LoveWallApp` owns the session, the wall and every background task
//! handle. All mutation happens in `handle_event`, fed by a single channel
//! that stdin, generation requests, the recorder and the location watch
//! send into.

mod commands;
mod core;
mod dispatch;
mod event_loop;
mod init;
mod location;
mod media;
mod render;
mod tasks;
mod types;


pub use core::LoveWallApp;
pub use init::build_client;
