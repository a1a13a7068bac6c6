//! Location Paths
//!
//! Root-to-node display paths ("House › Kitchen › Drawer") and the
//! path-sorted option lists used by the forms.

use crate::models::Location;
use crate::tree::descendant_closure;
use std::collections::{HashMap, HashSet};

pub const PATH_SEPARATOR: &str = " › ";

/// Resolves display paths against one snapshot of the location list
pub struct PathResolver<'a> {
    by_id: HashMap<u32, &'a Location>,
}

impl<'a> PathResolver<'a> {
    pub fn new(locations: &'a [Location]) -> Self {
        Self { by_id: locations.iter().map(|loc| (loc.id, loc)).collect() }
    }

    /// Names from the root down to `id`, joined with [`PATH_SEPARATOR`].
    ///
    /// The walk stops at an unknown parent, or at an id it has already
    /// visited. An unknown `id` yields an empty string.
    pub fn path(&self, id: u32) -> String {
        let mut parts = Vec::new();
        let mut visited = HashSet::new();
        let mut current = self.by_id.get(&id).copied();
        while let Some(loc) = current {
            if !visited.insert(loc.id) {
                break;
            }
            parts.push(loc.name.as_str());
            current = loc.parent_id.and_then(|pid| self.by_id.get(&pid).copied());
        }
        parts.reverse();
        parts.join(PATH_SEPARATOR)
    }

    /// Ids from `id` up to its root, `id` first
    pub fn ancestors_and_self(&self, id: u32) -> Vec<u32> {
        let mut chain = Vec::new();
        let mut current = self.by_id.get(&id).copied();
        while let Some(loc) = current {
            if chain.contains(&loc.id) {
                break;
            }
            chain.push(loc.id);
            current = loc.parent_id.and_then(|pid| self.by_id.get(&pid).copied());
        }
        chain
    }

    pub fn get(&self, id: u32) -> Option<&'a Location> {
        self.by_id.get(&id).copied()
    }
}

/// One entry of a parent/location `<select>`
#[derive(Debug, Clone, PartialEq)]
pub struct LocationOption {
    pub id: u32,
    pub path: String,
}

/// All locations as menu options, sorted by full path.
///
/// With `exclude`, that location and all of its descendants are left out so
/// a location can never be re-parented under itself.
pub fn location_options(locations: &[Location], exclude: Option<u32>) -> Vec<LocationOption> {
    let excluded = descendant_closure(locations, exclude);
    let resolver = PathResolver::new(locations);

    let mut options: Vec<LocationOption> = locations
        .iter()
        .filter(|loc| !excluded.contains(&loc.id))
        .map(|loc| LocationOption { id: loc.id, path: resolver.path(loc.id) })
        .collect();
    options.sort_by(|a, b| {
        a.path
            .to_lowercase()
            .cmp(&b.path.to_lowercase())
            .then_with(|| a.path.cmp(&b.path))
    });
    options
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::tests::{house, make_location};

    fn location_path(locations: &[Location], id: u32) -> String {
        PathResolver::new(locations).path(id)
    }

    #[test]
    fn test_three_level_path() {
        assert_eq!(location_path(&house(), 3), "House › Kitchen › Drawer");
        assert_eq!(location_path(&house(), 1), "House");
    }

    #[test]
    fn test_orphan_path_is_own_name() {
        let locs = vec![make_location(5, "Lost", Some(404))];
        assert_eq!(location_path(&locs, 5), "Lost");
    }

    #[test]
    fn test_unknown_id_is_empty() {
        assert_eq!(location_path(&house(), 99), "");
    }

    #[test]
    fn test_cyclic_parents_terminate() {
        let locs = vec![make_location(1, "A", Some(2)), make_location(2, "B", Some(1))];
        assert_eq!(location_path(&locs, 1), "B › A");
        assert_eq!(PathResolver::new(&locs).ancestors_and_self(2), vec![2, 1]);
    }

    #[test]
    fn test_ancestors_and_self() {
        let locs = house();
        let resolver = PathResolver::new(&locs);
        assert_eq!(resolver.ancestors_and_self(3), vec![3, 2, 1]);
        assert!(resolver.ancestors_and_self(42).is_empty());
    }

    #[test]
    fn test_options_sorted_by_path() {
        let locs = vec![
            make_location(1, "house", None),
            make_location(2, "Kitchen", Some(1)),
            make_location(3, "Attic", Some(1)),
            make_location(4, "Garage", None),
        ];
        let paths: Vec<String> = location_options(&locs, None).into_iter().map(|o| o.path).collect();
        assert_eq!(paths, vec!["Garage", "house", "house › Attic", "house › Kitchen"]);
    }

    #[test]
    fn test_options_exclude_subtree() {
        let mut locs = house();
        locs.push(make_location(4, "Pantry", Some(1)));
        locs.push(make_location(5, "Spoon tray", Some(3)));

        let ids: Vec<u32> = location_options(&locs, Some(2)).into_iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![1, 4]);

        let ids: Vec<u32> = location_options(&locs, Some(1)).into_iter().map(|o| o.id).collect();
        assert!(ids.is_empty());
    }
}
