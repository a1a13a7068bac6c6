//! Tree Utilities
//!
//! Builds the location hierarchy from the flat backend list and flattens
//! it into display rows.

use crate::models::Location;
use std::collections::{HashMap, HashSet};

/// A location plus the ids of its direct children, in input order
#[derive(Debug, Clone)]
pub struct TreeNode<'a> {
    pub location: &'a Location,
    pub children: Vec<u32>,
}

/// Lookup map and root order for one render
#[derive(Debug, Default)]
pub struct LocationTree<'a> {
    pub nodes: HashMap<u32, TreeNode<'a>>,
    pub roots: Vec<u32>,
}

/// A row in the rendered list
#[derive(Debug, Clone, PartialEq)]
pub struct VisibleRow<'a> {
    pub location: &'a Location,
    pub depth: usize,
    pub has_children: bool,
}

/// Link locations to their parents.
///
/// A `parent_id` that names no known location makes the record a root.
pub fn build_tree(locations: &[Location]) -> LocationTree<'_> {
    let mut nodes: HashMap<u32, TreeNode<'_>> = locations
        .iter()
        .map(|loc| (loc.id, TreeNode { location: loc, children: Vec::new() }))
        .collect();

    let mut roots = Vec::new();
    for loc in locations {
        match loc.parent_id.and_then(|pid| nodes.get_mut(&pid)) {
            Some(parent) => parent.children.push(loc.id),
            None => roots.push(loc.id),
        }
    }

    LocationTree { nodes, roots }
}

/// Rows currently visible: pre-order DFS that only descends into expanded nodes
pub fn flatten_visible<'a>(tree: &LocationTree<'a>, expanded: &HashSet<u32>) -> Vec<VisibleRow<'a>> {
    fn collect<'a>(
        id: u32,
        depth: usize,
        tree: &LocationTree<'a>,
        expanded: &HashSet<u32>,
        result: &mut Vec<VisibleRow<'a>>,
    ) {
        let Some(node) = tree.nodes.get(&id) else { return };
        let has_children = !node.children.is_empty();
        result.push(VisibleRow { location: node.location, depth, has_children });
        if has_children && expanded.contains(&id) {
            for child in &node.children {
                collect(*child, depth + 1, tree, expanded, result);
            }
        }
    }

    let mut result = Vec::new();
    for root in &tree.roots {
        collect(*root, 0, tree, expanded, &mut result);
    }
    result
}

/// Seeds plus every transitive descendant.
///
/// Rescans the flat list until a pass adds nothing; O(n²) in the worst case.
pub fn descendant_closure(locations: &[Location], seeds: impl IntoIterator<Item = u32>) -> HashSet<u32> {
    let mut closure: HashSet<u32> = seeds.into_iter().collect();
    let mut changed = !closure.is_empty();
    while changed {
        changed = false;
        for loc in locations {
            if closure.contains(&loc.id) {
                continue;
            }
            if loc.parent_id.is_some_and(|pid| closure.contains(&pid)) {
                closure.insert(loc.id);
                changed = true;
            }
        }
    }
    closure
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    pub(crate) fn make_location(id: u32, name: &str, parent_id: Option<u32>) -> Location {
        let at = Utc.with_ymd_and_hms(2025, 3, 5, 14, 7, 0).unwrap();
        Location { id, name: name.to_string(), parent_id, created_at: at, updated_at: at }
    }

    /// House › Kitchen › Drawer
    pub(crate) fn house() -> Vec<Location> {
        vec![
            make_location(1, "House", None),
            make_location(2, "Kitchen", Some(1)),
            make_location(3, "Drawer", Some(2)),
        ]
    }

    fn ids(rows: &[VisibleRow]) -> Vec<(u32, usize)> {
        rows.iter().map(|r| (r.location.id, r.depth)).collect()
    }

    #[test]
    fn test_build_tree_every_record_once() {
        let locs = vec![
            make_location(4, "Shelf", Some(2)),
            make_location(1, "House", None),
            make_location(2, "Garage", Some(1)),
            make_location(5, "Box", Some(4)),
            make_location(3, "Shed", None),
        ];
        let tree = build_tree(&locs);

        let mut seen: Vec<u32> = tree.roots.clone();
        for node in tree.nodes.values() {
            seen.extend(&node.children);
        }
        seen.sort();
        assert_eq!(seen, vec![1, 2, 3, 4, 5]);
        assert_eq!(tree.roots, vec![1, 3]);
        // Child listed before its parent still gets linked
        assert_eq!(tree.nodes[&2].children, vec![4]);
    }

    #[test]
    fn test_build_tree_orphan_is_root() {
        let locs = vec![make_location(1, "House", None), make_location(9, "Lost", Some(42))];
        let tree = build_tree(&locs);
        assert_eq!(tree.roots, vec![1, 9]);
    }

    #[test]
    fn test_children_keep_input_order() {
        let locs = vec![
            make_location(1, "House", None),
            make_location(7, "Zeta", Some(1)),
            make_location(3, "Alpha", Some(1)),
        ];
        let tree = build_tree(&locs);
        assert_eq!(tree.nodes[&1].children, vec![7, 3]);
    }

    #[test]
    fn test_flatten_only_root_expanded() {
        let locs = house();
        let tree = build_tree(&locs);
        let rows = flatten_visible(&tree, &HashSet::from([1]));
        assert_eq!(ids(&rows), vec![(1, 0), (2, 1)]);
        assert!(rows[1].has_children);

        // Expanding only the grandparent's child does not reveal anything
        let rows = flatten_visible(&tree, &HashSet::from([2]));
        assert_eq!(ids(&rows), vec![(1, 0)]);
    }

    #[test]
    fn test_flatten_all_expanded() {
        let locs = house();
        let tree = build_tree(&locs);
        let rows = flatten_visible(&tree, &HashSet::from([1, 2]));
        assert_eq!(ids(&rows), vec![(1, 0), (2, 1), (3, 2)]);
        assert_eq!(
            rows.iter().map(|r| r.has_children).collect::<Vec<_>>(),
            vec![true, true, false]
        );
    }

    #[test]
    fn test_flatten_preorder_across_roots() {
        let locs = vec![
            make_location(1, "A", None),
            make_location(2, "B", None),
            make_location(3, "A1", Some(1)),
            make_location(4, "A2", Some(1)),
            make_location(5, "A1a", Some(3)),
            make_location(6, "B1", Some(2)),
        ];
        let tree = build_tree(&locs);
        let rows = flatten_visible(&tree, &HashSet::from([1, 2, 3]));
        assert_eq!(ids(&rows), vec![(1, 0), (3, 1), (5, 2), (4, 1), (2, 0), (6, 1)]);
    }

    #[test]
    fn test_flatten_skips_cycle_members() {
        // 2 and 3 point at each other, so neither is reachable from a root
        let locs = vec![
            make_location(1, "House", None),
            make_location(2, "Loop A", Some(3)),
            make_location(3, "Loop B", Some(2)),
        ];
        let tree = build_tree(&locs);
        let rows = flatten_visible(&tree, &HashSet::from([1, 2, 3]));
        assert_eq!(ids(&rows), vec![(1, 0)]);
    }

    #[test]
    fn test_closure_collects_descendants() {
        let mut locs = house();
        locs.push(make_location(4, "Garage", None));
        locs.push(make_location(5, "Fork", Some(2)));
        assert_eq!(descendant_closure(&locs, [2]), HashSet::from([2, 3, 5]));
        assert_eq!(descendant_closure(&locs, [4]), HashSet::from([4]));
        assert!(descendant_closure(&locs, []).is_empty());
    }

    #[test]
    fn test_closure_is_monotonic_and_idempotent() {
        let mut locs = house();
        locs.push(make_location(4, "Garage", None));
        locs.push(make_location(5, "Bench", Some(4)));
        for seeds in [vec![1], vec![2, 4], vec![3], vec![99]] {
            let once = descendant_closure(&locs, seeds.clone());
            assert!(seeds.iter().all(|s| once.contains(s)));
            let twice = descendant_closure(&locs, once.iter().copied());
            assert_eq!(once, twice);
        }
    }
}
