//! # Rolo Architecture
//!
//! Rolo is a **UI-agnostic contact-management library** with a CLI client.
//! The binary is one possible front end; everything from the view model
//! inward takes plain Rust arguments, returns `Result`, and never touches
//! a terminal.
//!
//! ## The Layers
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  CLI (args.rs, print.rs, wired by main.rs)               │
//! │  - The only place that knows about stdout and exit codes │
//! └──────────────────────────────────────────────────────────┘
//!                             │
//!                             ▼
//! ┌──────────────────────────────────────────────────────────┐
//! │  View model (viewmodel.rs)                               │
//! │  - Exposes the live contact feed to the UI               │
//! │  - Dispatches add/update/delete intents as background    │
//! │    tasks scoped to the holder's lifetime                 │
//! └──────────────────────────────────────────────────────────┘
//!                             │
//!                             ▼
//! ┌──────────────────────────────────────────────────────────┐
//! │  Repository (repo.rs)                                    │
//! │  - Delegates CRUD to the store                           │
//! │  - Owns the watch-channel feed, re-published per change  │
//! └──────────────────────────────────────────────────────────┘
//!                             │
//!                             ▼
//! ┌──────────────────────────────────────────────────────────┐
//! │  Storage (store/)                                        │
//! │  - Abstract ContactStore trait                           │
//! │  - SqliteStore (production), InMemoryStore (testing)     │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! Mutations flow down as fire-and-forget tasks; the updated contact list
//! flows back up through the repository's watch channel. Screens render
//! from a push-based feed and never poll or manually refresh.
//!
//! ## Module Overview
//!
//! - [`model`]: the `Contact` record and its validation rules
//! - [`store`]: storage abstraction and implementations
//! - [`repo`]: repository facade owning the live feed
//! - [`viewmodel`]: presentation-state holder dispatching intents
//! - [`nav`]: destinations and the navigation state machine
//! - [`images`]: copies picked photos into app-owned storage
//! - [`config`]: configuration management
//! - [`error`]: error types

pub mod config;
pub mod error;
pub mod images;
pub mod model;
pub mod nav;
pub mod repo;
pub mod store;
pub mod viewmodel;
