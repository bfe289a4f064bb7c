// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Page routing table.
//!
//! The application is a handful of pages behind client-side paths. This
//! module only declares which page component answers which path: an ordered
//! list of pairs that the router in the UI layer consumes. No matching
//! happens here, the table is plain data.

use serde::{Deserialize, Serialize};

/// Wildcard path the consuming router treats as a catch-all.
pub const CATCH_ALL: &str = "*";

/// A single path-to-component binding.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Route {
    /// Client-side path, `/`-rooted, or [`CATCH_ALL`].
    pub path: String,
    /// Identifier of the page component that renders the path.
    pub component: String,
}

impl Route {
    pub fn new(path: &str, component: &str) -> Self {
        Self {
            path: path.to_string(),
            component: component.to_string(),
        }
    }
}

/// An ordered collection of [`Route`]s.
///
/// Order is meaningful: the consuming router checks entries first to last,
/// so a catch-all belongs at the end of the table.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self { routes: Vec::new() }
    }

    /// Appends a route, preserving insertion order.
    pub fn push(&mut self, route: Route) {
        self.routes.push(route);
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

/// The application's page table.
///
/// Every path lands on the leaderboard: the root explicitly, everything
/// else through the trailing catch-all.
pub fn default_routes() -> RouteTable {
    let mut table = RouteTable::new();
    table.push(Route::new("/", "leaderboard"));
    table.push(Route::new(CATCH_ALL, "leaderboard"));
    table
}
