//! Dashboard list state: the fetched snapshot plus the operator's search and
//! city filter.
//!
//! DESIGN
//! ======
//! Only the snapshot and the two inputs are stored. The visible rows and the
//! city options are derived on demand, so they can never drift from the
//! snapshot after a delete patches it.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use crate::net::Profile;

#[derive(Clone, Debug, Default)]
pub struct ProfileListState {
    /// Snapshot from the last successful fetch, minus local deletions.
    pub profiles: Vec<Profile>,
    /// Name search text. Empty matches everything.
    pub search: String,
    /// Selected city. Empty means "All Locations".
    pub city_filter: String,
    /// `true` once a fetch has succeeded.
    pub loaded: bool,
}

impl ProfileListState {
    /// Replace the snapshot with a fresh fetch result.
    pub fn set_profiles(&mut self, profiles: Vec<Profile>) {
        self.profiles = profiles;
        self.loaded = true;
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
    }

    pub fn set_city_filter(&mut self, city: impl Into<String>) {
        self.city_filter = city.into();
    }

    /// Profiles passing both the name search and the city filter, in
    /// snapshot order.
    #[must_use]
    pub fn filtered(&self) -> Vec<&Profile> {
        let needle = self.search.to_lowercase();
        self.profiles
            .iter()
            .filter(|p| matches_search(p, &needle) && matches_city(p, &self.city_filter))
            .collect()
    }

    /// Distinct non-empty cities across the whole snapshot, in first-seen
    /// order.
    #[must_use]
    pub fn cities(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for profile in &self.profiles {
            let city = profile.city.as_str();
            if !city.is_empty() && !out.contains(&city) {
                out.push(city);
            }
        }
        out
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Profile> {
        self.profiles.iter().find(|p| p.id == id)
    }

    /// Drop every profile carrying `id`. Returns how many were removed.
    pub fn remove(&mut self, id: &str) -> usize {
        let before = self.profiles.len();
        self.profiles.retain(|p| p.id != id);
        before - self.profiles.len()
    }
}

/// `needle` must already be lowercased.
fn matches_search(profile: &Profile, needle: &str) -> bool {
    needle.is_empty() || profile.name.to_lowercase().contains(needle)
}

fn matches_city(profile: &Profile, city: &str) -> bool {
    city.is_empty() || profile.city == city
}
