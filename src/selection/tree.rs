use super::{AddRejection, SelectedSongs};
use crate::models::Track;
use std::fmt;

/// Default number of recommendation children attached per expansion
pub const MAX_CHILDREN: usize = 2;

/// Expansion lifecycle of a tree node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpansionState {
    /// Children empty, no request made yet
    Unexpanded,
    /// A recommendation request is in flight
    Expanding,
    /// Children populated
    Expanded,
}

/// Why an expansion request was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpandError {
    NodeNotFound,
    /// A request for this node is already in flight
    ExpansionInFlight,
    /// The selection set is full; the pending expansion is abandoned
    SelectionFull,
}

impl fmt::Display for ExpandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpandError::NodeNotFound => write!(f, "node not found in tree"),
            ExpandError::ExpansionInFlight => write!(f, "expansion already in flight"),
            ExpandError::SelectionFull => write!(f, "song limit reached"),
        }
    }
}

impl std::error::Error for ExpandError {}

/// One node of the similar-track tree. A node owns its children; nodes are
/// never removed except by discarding the whole tree.
#[derive(Debug, Clone)]
pub struct SelectionTreeNode {
    pub track: Track,
    pub children: Vec<SelectionTreeNode>,
    pub selected: bool,
    state: ExpansionState,
}

impl SelectionTreeNode {
    fn new(track: Track, selected: bool) -> Self {
        Self {
            track,
            children: Vec::new(),
            selected,
            state: ExpansionState::Unexpanded,
        }
    }

    pub fn state(&self) -> ExpansionState {
        self.state
    }
}

/// A user-driven, lazily expanded tree of similar-track recommendations
/// rooted at one chosen track. Owns structure only; rendering and the
/// recommendation fetches live with the callers.
#[derive(Debug)]
pub struct SelectionTree {
    root: SelectionTreeNode,
}

impl SelectionTree {
    /// Start a new tree. The root track is the user's initial pick and is
    /// created selected; picking a new root means discarding the old tree.
    pub fn new(root_track: Track) -> Self {
        Self {
            root: SelectionTreeNode::new(root_track, true),
        }
    }

    pub fn root(&self) -> &SelectionTreeNode {
        &self.root
    }

    /// Find a node by track id, depth-first
    pub fn node(&self, id: &str) -> Option<&SelectionTreeNode> {
        Self::find(&self.root, id)
    }

    fn find<'a>(node: &'a SelectionTreeNode, id: &str) -> Option<&'a SelectionTreeNode> {
        if node.track.id == id {
            return Some(node);
        }
        node.children.iter().find_map(|child| Self::find(child, id))
    }

    fn find_mut<'a>(
        node: &'a mut SelectionTreeNode,
        id: &str,
    ) -> Option<&'a mut SelectionTreeNode> {
        if node.track.id == id {
            return Some(node);
        }
        node.children
            .iter_mut()
            .find_map(|child| Self::find_mut(child, id))
    }

    /// User clicked a node: add its track to the selection set and mark the
    /// node as awaiting recommendations.
    ///
    /// If the track is already selected the add is skipped and the node's
    /// `selected` flag is left as-is, but the expansion still proceeds. A
    /// full selection set abandons the expansion entirely: the node stays
    /// `Unexpanded` and unselected. A node already `Expanding` rejects the
    /// re-entrant request.
    pub fn request_expansion(
        &mut self,
        set: &mut SelectedSongs,
        id: &str,
    ) -> Result<(), ExpandError> {
        let node = Self::find_mut(&mut self.root, id).ok_or(ExpandError::NodeNotFound)?;
        if node.state == ExpansionState::Expanding {
            return Err(ExpandError::ExpansionInFlight);
        }

        if !set.contains(&node.track.id) {
            match set.add(node.track.clone()) {
                Ok(()) => node.selected = true,
                Err(AddRejection::LimitReached) | Err(AddRejection::Duplicate) => {
                    return Err(ExpandError::SelectionFull);
                }
            }
        }

        node.state = ExpansionState::Expanding;
        Ok(())
    }

    /// Attach recommendation results to a node: at most `max_children`
    /// candidates become fresh unexpanded, unselected children. Any previous
    /// children are REPLACED, never accumulated, so a repeated expansion is
    /// an idempotent overwrite. Returns the number attached.
    pub fn populate_children(
        &mut self,
        id: &str,
        candidates: Vec<Track>,
        max_children: usize,
    ) -> Result<usize, ExpandError> {
        let node = Self::find_mut(&mut self.root, id).ok_or(ExpandError::NodeNotFound)?;

        node.children = candidates
            .into_iter()
            .take(max_children)
            .map(|track| SelectionTreeNode::new(track, false))
            .collect();
        node.state = ExpansionState::Expanded;

        Ok(node.children.len())
    }

    /// Abandon an in-flight expansion; the node drops back to `Unexpanded`
    pub fn cancel_expansion(&mut self, id: &str) -> Result<(), ExpandError> {
        let node = Self::find_mut(&mut self.root, id).ok_or(ExpandError::NodeNotFound)?;
        if node.state == ExpansionState::Expanding {
            node.state = ExpansionState::Unexpanded;
        }
        Ok(())
    }

    /// Depth-first `(node, parent)` pairs for the layout pass; the root's
    /// parent is `None`
    pub fn layout_pairs(&self) -> Vec<(&SelectionTreeNode, Option<&SelectionTreeNode>)> {
        let mut pairs = Vec::new();
        Self::collect_pairs(&self.root, None, &mut pairs);
        pairs
    }

    fn collect_pairs<'a>(
        node: &'a SelectionTreeNode,
        parent: Option<&'a SelectionTreeNode>,
        pairs: &mut Vec<(&'a SelectionTreeNode, Option<&'a SelectionTreeNode>)>,
    ) {
        pairs.push((node, parent));
        for child in &node.children {
            Self::collect_pairs(child, Some(node), pairs);
        }
    }
}
