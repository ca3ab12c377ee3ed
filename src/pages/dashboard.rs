//! Admin dashboard controller: fetch on mount, filter locally, delete through
//! the API, and hand add/edit off to sibling routes.
//!
//! ERROR HANDLING
//! ==============
//! A failed fetch is logged and otherwise ignored, leaving whatever snapshot
//! was already held (empty on mount). A failed delete is logged and reported
//! back as [`Notice::DeleteFailed`]; the snapshot is left untouched. Nothing
//! is retried and the snapshot is never reconciled with the server unless
//! the operator reloads.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use std::fmt;

use crate::net::ProfileStore;
use crate::routes::Route;
use crate::state::ProfileListState;

/// Operator-facing outcome of a delete.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Notice {
    Deleted,
    DeleteFailed,
}

impl Notice {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::Deleted => "User deleted successfully",
            Self::DeleteFailed => "Failed to delete user. Please try again.",
        }
    }

    #[must_use]
    pub fn is_success(self) -> bool {
        matches!(self, Self::Deleted)
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

pub struct DashboardPage<S> {
    store: S,
    state: ProfileListState,
}

impl<S: ProfileStore> DashboardPage<S> {
    pub fn new(store: S) -> Self {
        Self { store, state: ProfileListState::default() }
    }

    #[must_use]
    pub fn state(&self) -> &ProfileListState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut ProfileListState {
        &mut self.state
    }

    /// Initial fetch. On failure the list stays as it was (empty for a fresh
    /// page).
    pub async fn mount(&mut self) {
        self.fetch().await;
    }

    /// Operator-requested refetch; same failure handling as [`Self::mount`].
    pub async fn reload(&mut self) {
        self.fetch().await;
    }

    async fn fetch(&mut self) {
        match self.store.list_profiles().await {
            Ok(profiles) => {
                tracing::info!(count = profiles.len(), "profiles loaded");
                self.state.set_profiles(profiles);
            }
            Err(e) => {
                tracing::error!(error = %e, detail = %e.detail(), "profile fetching failed");
            }
        }
    }

    /// Delete `id` on the server, then drop it from the local snapshot.
    pub async fn delete(&mut self, id: &str) -> Notice {
        tracing::debug!(%id, "deleting user");
        match self.store.delete_profile(id).await {
            Ok(()) => {
                let removed = self.state.remove(id);
                tracing::info!(%id, removed, "user deleted");
                Notice::Deleted
            }
            Err(e) => {
                tracing::error!(%id, error = %e, detail = %e.detail(), "error deleting user");
                Notice::DeleteFailed
            }
        }
    }

    #[must_use]
    pub fn add_route(&self) -> Route {
        Route::AddProfile
    }

    #[must_use]
    pub fn edit_route(&self, id: &str) -> Route {
        Route::EditProfile(id.to_owned())
    }
}
