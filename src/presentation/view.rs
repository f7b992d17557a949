/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! Page view state
//!
//! The page shows exactly one of four sections. [`View`] is that state,
//! [`View::section`] is the section to show for it, and [`next_view`] is the
//! transition applied after each user action.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Section of the page currently shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    /// Landing section
    #[default]
    Home,
    /// Login form
    Login,
    /// Registration form
    Register,
    /// Profile and session tools, for logged in users
    Tools,
}

impl View {
    /// Every view, in page order
    pub const ALL: [View; 4] = [View::Home, View::Login, View::Register, View::Tools];

    /// Name of the section shown for this view
    #[must_use]
    pub fn section(&self) -> &'static str {
        match self {
            View::Home => "home",
            View::Login => "login",
            View::Register => "register",
            View::Tools => "tools",
        }
    }

    /// Looks a view up by section name, ignoring case
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|view| view.section().eq_ignore_ascii_case(name.trim()))
    }

    /// Visibility of every section for this view
    #[must_use]
    pub fn visibility(&self) -> [(&'static str, bool); 4] {
        Self::ALL.map(|view| (view.section(), view == *self))
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.section())
    }
}

impl FromStr for View {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| format!("unknown section: {s}"))
    }
}

/// Something that happened on the page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewEvent {
    /// The user picked a section
    Navigate(View),
    /// Login succeeded
    LoggedIn,
    /// Registration succeeded
    Registered,
    /// The session ended (logout, logout-all, deactivation)
    LoggedOut,
    /// The API rejected the access token
    SessionExpired,
}

/// View shown after `event` happens while `current` is shown
#[must_use]
pub fn next_view(current: View, event: ViewEvent) -> View {
    match event {
        ViewEvent::Navigate(view) => view,
        ViewEvent::LoggedIn => View::Tools,
        ViewEvent::Registered => View::Login,
        ViewEvent::LoggedOut => View::Home,
        ViewEvent::SessionExpired if current == View::Tools => View::Login,
        ViewEvent::SessionExpired => current,
    }
}
