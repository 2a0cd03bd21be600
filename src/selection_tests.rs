// Tests for the selected-songs set and the similar-track selection tree

use crate::models::Track;
use crate::selection::{
    AddRejection, ExpandError, ExpansionState, MAX_CHILDREN, SONG_LIMIT, SelectedSongs,
    SelectionTree,
};

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_track(id: &str) -> Track {
        Track {
            id: id.to_string(),
            name: format!("Track {id}"),
            ..Track::default()
        }
    }

    #[test]
    fn test_set_add_and_query() {
        let mut set = SelectedSongs::new();
        assert!(set.is_empty());
        assert!(set.can_add());

        set.add(create_test_track("a")).unwrap();
        set.add(create_test_track("b")).unwrap();

        assert_eq!(set.len(), 2);
        assert!(set.contains("a"));
        assert!(!set.contains("z"));

        // Insertion order preserved
        let ids: Vec<&str> = set.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn test_set_rejects_duplicate_with_single_entry_kept() {
        let mut set = SelectedSongs::new();
        set.add(create_test_track("a")).unwrap();

        let result = set.add(create_test_track("a"));
        assert_eq!(result, Err(AddRejection::Duplicate));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_set_rejects_eleventh_entry() {
        let mut set = SelectedSongs::new();
        for i in 0..SONG_LIMIT {
            set.add(create_test_track(&format!("t{i}"))).unwrap();
        }
        assert!(!set.can_add());

        let result = set.add(create_test_track("one-too-many"));
        assert_eq!(result, Err(AddRejection::LimitReached));
        assert_eq!(set.len(), SONG_LIMIT);
        assert!(!set.contains("one-too-many"));
    }

    #[test]
    fn test_set_remove_is_noop_when_absent() {
        let mut set = SelectedSongs::new();
        set.add(create_test_track("a")).unwrap();

        set.remove("nope");
        assert_eq!(set.len(), 1);

        set.remove("a");
        assert!(set.is_empty());
        // Removal frees a slot again
        assert!(set.add(create_test_track("a")).is_ok());
    }

    #[test]
    fn test_tree_root_starts_selected_and_unexpanded() {
        let tree = SelectionTree::new(create_test_track("root"));

        assert!(tree.root().selected);
        assert_eq!(tree.root().state(), ExpansionState::Unexpanded);
        assert!(tree.root().children.is_empty());
        assert!(tree.node("root").is_some());
        assert!(tree.node("missing").is_none());
    }

    #[test]
    fn test_request_expansion_adds_track_and_moves_to_expanding() {
        let mut set = SelectedSongs::new();
        let mut tree = SelectionTree::new(create_test_track("root"));

        tree.request_expansion(&mut set, "root").unwrap();

        assert!(set.contains("root"));
        assert_eq!(tree.node("root").unwrap().state(), ExpansionState::Expanding);
    }

    #[test]
    fn test_reentrant_expansion_is_rejected() {
        let mut set = SelectedSongs::new();
        let mut tree = SelectionTree::new(create_test_track("root"));

        tree.request_expansion(&mut set, "root").unwrap();
        let second = tree.request_expansion(&mut set, "root");

        assert_eq!(second, Err(ExpandError::ExpansionInFlight));
        // The set was not touched twice
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_populate_children_caps_at_max_children() {
        let mut tree = SelectionTree::new(create_test_track("root"));
        let candidates = vec![
            create_test_track("c1"),
            create_test_track("c2"),
            create_test_track("c3"),
        ];

        let attached = tree
            .populate_children("root", candidates, MAX_CHILDREN)
            .unwrap();

        assert_eq!(attached, MAX_CHILDREN);
        let root = tree.root();
        assert_eq!(root.children.len(), MAX_CHILDREN);
        assert_eq!(root.state(), ExpansionState::Expanded);
        // Children start unexpanded and unselected
        for child in &root.children {
            assert!(!child.selected);
            assert_eq!(child.state(), ExpansionState::Unexpanded);
        }
    }

    #[test]
    fn test_populate_children_replaces_instead_of_appending() {
        let mut tree = SelectionTree::new(create_test_track("root"));

        tree.populate_children(
            "root",
            vec![create_test_track("old1"), create_test_track("old2")],
            MAX_CHILDREN,
        )
        .unwrap();
        tree.populate_children(
            "root",
            vec![create_test_track("new1"), create_test_track("new2")],
            MAX_CHILDREN,
        )
        .unwrap();

        let ids: Vec<&str> = tree
            .root()
            .children
            .iter()
            .map(|c| c.track.id.as_str())
            .collect();
        assert_eq!(ids, vec!["new1", "new2"]);
    }

    #[test]
    fn test_populate_children_accepts_fewer_candidates() {
        let mut tree = SelectionTree::new(create_test_track("root"));

        let attached = tree
            .populate_children("root", vec![create_test_track("only")], MAX_CHILDREN)
            .unwrap();

        assert_eq!(attached, 1);
        assert_eq!(tree.root().children.len(), 1);
    }

    #[test]
    fn test_full_set_abandons_expansion_and_leaves_node_unselected() {
        let mut set = SelectedSongs::new();
        let mut tree = SelectionTree::new(create_test_track("root"));
        tree.populate_children("root", vec![create_test_track("child")], MAX_CHILDREN)
            .unwrap();

        // Fill the set with unrelated tracks
        for i in 0..SONG_LIMIT {
            set.add(create_test_track(&format!("filler{i}"))).unwrap();
        }

        let result = tree.request_expansion(&mut set, "child");

        assert_eq!(result, Err(ExpandError::SelectionFull));
        let child = tree.node("child").unwrap();
        assert_eq!(child.state(), ExpansionState::Unexpanded);
        assert!(!child.selected);
        assert_eq!(set.len(), SONG_LIMIT);
    }

    #[test]
    fn test_already_selected_track_still_expands_without_marking() {
        let mut set = SelectedSongs::new();
        let mut tree = SelectionTree::new(create_test_track("root"));
        tree.populate_children("root", vec![create_test_track("child")], MAX_CHILDREN)
            .unwrap();

        // The child's track got into the set some other way (e.g. heat map)
        set.add(create_test_track("child")).unwrap();

        tree.request_expansion(&mut set, "child").unwrap();

        let child = tree.node("child").unwrap();
        assert_eq!(child.state(), ExpansionState::Expanding);
        // No duplicate add, and the node keeps its unselected flag
        assert_eq!(set.len(), 1);
        assert!(!child.selected);
    }

    #[test]
    fn test_cancel_expansion_returns_to_unexpanded() {
        let mut set = SelectedSongs::new();
        let mut tree = SelectionTree::new(create_test_track("root"));

        tree.request_expansion(&mut set, "root").unwrap();
        tree.cancel_expansion("root").unwrap();

        assert_eq!(tree.node("root").unwrap().state(), ExpansionState::Unexpanded);
        // A fresh request goes through again
        assert!(tree.request_expansion(&mut set, "root").is_ok());
    }

    #[test]
    fn test_expansion_of_unknown_node_fails() {
        let mut set = SelectedSongs::new();
        let mut tree = SelectionTree::new(create_test_track("root"));

        assert_eq!(
            tree.request_expansion(&mut set, "ghost"),
            Err(ExpandError::NodeNotFound)
        );
        assert_eq!(
            tree.populate_children("ghost", vec![], MAX_CHILDREN),
            Err(ExpandError::NodeNotFound)
        );
    }

    #[test]
    fn test_layout_pairs_walk_depth_first_with_parents() {
        let mut tree = SelectionTree::new(create_test_track("root"));
        tree.populate_children(
            "root",
            vec![create_test_track("a"), create_test_track("b")],
            MAX_CHILDREN,
        )
        .unwrap();
        tree.populate_children("a", vec![create_test_track("a1")], MAX_CHILDREN)
            .unwrap();

        let pairs = tree.layout_pairs();
        let order: Vec<&str> = pairs.iter().map(|(n, _)| n.track.id.as_str()).collect();
        assert_eq!(order, vec!["root", "a", "a1", "b"]);

        assert!(pairs[0].1.is_none());
        assert_eq!(pairs[1].1.unwrap().track.id, "root");
        assert_eq!(pairs[2].1.unwrap().track.id, "a");
        assert_eq!(pairs[3].1.unwrap().track.id, "root");
    }
}
