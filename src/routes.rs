//! Admin UI routes the dashboard hands off to.
//!
//! Creating and editing profiles happen on sibling pages of the admin UI.
//! The client only resolves where those pages live.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::fmt;

use reqwest::Url;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    AddProfile,
    EditProfile(String),
}

impl Route {
    /// Path relative to the admin UI root. The id is encoded as one segment.
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::AddProfile => "/admin/add".to_owned(),
            Self::EditProfile(id) => format!("/admin/edit/{}", encode_segment(id)),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Percent-encode `raw` as a single URL path segment.
fn encode_segment(raw: &str) -> String {
    let Ok(mut url) = Url::parse("http://localhost/") else {
        return raw.to_owned();
    };
    if let Ok(mut segments) = url.path_segments_mut() {
        segments.clear().push(raw);
    }
    url.path().trim_start_matches('/').to_owned()
}

/// Resolves routes against an optional admin UI base URL.
#[derive(Clone, Debug, Default)]
pub struct Navigator {
    base_url: Option<String>,
}

impl Navigator {
    #[must_use]
    pub fn new(base_url: Option<String>) -> Self {
        Self {
            base_url: base_url.map(|b| b.trim_end_matches('/').to_owned()),
        }
    }

    /// Absolute URL when a base is configured, otherwise the bare path.
    #[must_use]
    pub fn resolve(&self, route: &Route) -> String {
        match &self.base_url {
            Some(base) => format!("{base}{}", route.path()),
            None => route.path(),
        }
    }
}
