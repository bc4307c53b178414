//! Shared client-side state modules.

pub mod session;

use leptos::prelude::RwSignal;

use crate::util::storage::LocalStorage;
use session::SessionStore;

/// Session store as provided through Leptos context.
pub type SessionSignal = RwSignal<SessionStore<LocalStorage>>;
