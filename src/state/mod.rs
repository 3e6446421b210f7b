/// State management module
///
/// This module handles all application state, including:
/// - The garment catalog and shared data structures (data.rs)
/// - The logo uploader's file choice and busy flag (uploader.rs)
/// - The controller state that gates preview requests (session.rs)
///
/// Nothing here touches the network or the toolkit; `main.rs` feeds request
/// outcomes back in as plain `Result`s.

pub mod data;
pub mod session;
pub mod uploader;
