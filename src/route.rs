use std::fmt;

use crate::core::RestaurantId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home, // Liked restaurants
    Survey,
    Category(String),
    Restaurant(RestaurantId),
    Community,
    WritePost,
    EditPost(u64),
    Login,
}

impl Route {
    /// Screens that send identity-bound writes ask for a session first.
    pub fn requires_session(&self) -> bool {
        matches!(self, Route::WritePost | Route::EditPost(_))
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Home => write!(f, "Favorites"),
            Route::Survey => write!(f, "Taste survey"),
            Route::Category(name) => write!(f, "Category: {name}"),
            Route::Restaurant(id) => write!(f, "Restaurant {id}"),
            Route::Community => write!(f, "Community"),
            Route::WritePost => write!(f, "New post"),
            Route::EditPost(id) => write!(f, "Edit post {id}"),
            Route::Login => write!(f, "Sign in"),
        }
    }
}

/// Oldest entries are dropped past this depth.
pub const HISTORY_LIMIT: usize = 32;

/// Current screen with a bounded back stack.
#[derive(Debug)]
pub struct Navigator {
    current: Route,
    history: Vec<Route>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self { current: Route::Home, history: Vec::new() }
    }
}

impl Navigator {
    pub fn new(start: Route) -> Self {
        Self { current: start, history: Vec::new() }
    }

    pub fn current(&self) -> &Route {
        &self.current
    }

    /// Returns `false` when already on `route`. Going to the screen on top
    /// of the back stack counts as going back, so bouncing between two
    /// screens does not grow the stack.
    pub fn go(&mut self, route: Route) -> bool {
        if route == self.current {
            return false;
        }
        if self.history.last() == Some(&route) {
            self.history.pop();
            self.current = route;
            return true;
        }
        let previous = std::mem::replace(&mut self.current, route);
        self.history.push(previous);
        if self.history.len() > HISTORY_LIMIT {
            let excess = self.history.len() - HISTORY_LIMIT;
            self.history.drain(..excess);
        }
        true
    }

    pub fn can_go_back(&self) -> bool {
        !self.history.is_empty()
    }

    pub fn back(&mut self) -> Option<&Route> {
        let previous = self.history.pop()?;
        self.current = previous;
        Some(&self.current)
    }
}
