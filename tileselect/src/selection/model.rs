//! Selection data model.
//!
//! The persistent selection and the ephemeral drag-session state owned by
//! the tracker. The persistent set keeps a hash view over its quad keys so
//! the drag sweep can test membership per sample without scanning.

use std::collections::HashSet;

use crate::coord::{LngLat, QuadKey};
use crate::grid::TileCollection;

/// Committed tile selection surviving across drawing sessions.
///
/// Mutated only by merge (commit of a drag) and clear. The cell sequence
/// and the membership view always describe the same set of quad keys.
#[derive(Debug, Clone, Default)]
pub struct SelectionSet {
    cells: TileCollection,
    keys: HashSet<QuadKey>,
}

impl SelectionSet {
    /// Create an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a selection from a previously captured collection,
    /// dropping cells whose quad key repeats.
    pub fn from_collection(collection: TileCollection) -> Self {
        let mut set = Self::new();
        for cell in collection.cells() {
            if set.keys.insert(cell.quad_key.clone()) {
                set.cells.push(cell.clone());
            }
        }
        set
    }

    /// Number of selected tiles.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True when nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Membership test by quad key.
    pub fn contains(&self, key: &QuadKey) -> bool {
        self.keys.contains(key)
    }

    /// The committed cells in commit order.
    pub fn collection(&self) -> &TileCollection {
        &self.cells
    }

    /// Iterator over the committed quad keys in commit order.
    pub fn quad_keys(&self) -> impl Iterator<Item = &QuadKey> {
        self.cells.quad_keys()
    }

    /// Order-preserving append of a committed drag's cells.
    ///
    /// The drag sweep already excluded committed tiles, so the incoming
    /// collection is disjoint from this set.
    pub(crate) fn merge(&mut self, transient: TileCollection) {
        for key in transient.quad_keys() {
            self.keys.insert(key.clone());
        }
        self.cells.append(transient);
    }

    /// Reset to the empty selection.
    pub(crate) fn clear(&mut self) {
        self.cells = TileCollection::new();
        self.keys.clear();
    }
}

/// Ephemeral state of one drawing session.
///
/// Created when drawing starts, discarded when the session ends, whether
/// it commits or is cancelled.
#[derive(Debug, Clone)]
pub struct DragSession {
    anchor: LngLat,
    last_move: Option<LngLat>,
    transient: TileCollection,
}

impl DragSession {
    /// Start a session anchored at the activation point.
    pub(crate) fn new(anchor: LngLat, seed: TileCollection) -> Self {
        Self {
            anchor,
            last_move: None,
            transient: seed,
        }
    }

    /// The point the session was anchored at.
    pub fn anchor(&self) -> LngLat {
        self.anchor
    }

    /// The most recent accepted pointer position, if any.
    pub fn last_move(&self) -> Option<LngLat> {
        self.last_move
    }

    /// The in-progress, uncommitted selection.
    pub fn transient(&self) -> &TileCollection {
        &self.transient
    }

    pub(crate) fn accept_move(&mut self, point: LngLat, transient: TileCollection) {
        self.last_move = Some(point);
        self.transient = transient;
    }

    pub(crate) fn into_transient(self) -> TileCollection {
        self.transient
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coord::TileCoord;
    use crate::grid::TileCell;

    fn collection(xs: impl IntoIterator<Item = u32>) -> TileCollection {
        xs.into_iter()
            .map(|x| TileCell::from_tile(&TileCoord::new(x, 0, 8)))
            .collect()
    }

    #[test]
    fn test_selection_set_starts_empty() {
        let set = SelectionSet::new();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
    }

    #[test]
    fn test_merge_extends_set_and_membership() {
        let mut set = SelectionSet::new();
        set.merge(collection(0..3));
        set.merge(collection(3..5));

        assert_eq!(set.len(), 5);
        for cell in collection(0..5).cells() {
            assert!(set.contains(&cell.quad_key));
        }
    }

    #[test]
    fn test_merge_preserves_commit_order() {
        let mut set = SelectionSet::new();
        set.merge(collection([4, 2]));
        set.merge(collection([7]));

        let keys: Vec<_> = set.quad_keys().cloned().collect();
        let expected: Vec<_> = collection([4, 2, 7]).quad_keys().cloned().collect();
        assert_eq!(keys, expected);
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut set = SelectionSet::new();
        set.merge(collection(0..4));
        let key = set.quad_keys().next().unwrap().clone();

        set.clear();
        assert!(set.is_empty());
        assert!(!set.contains(&key));
    }

    #[test]
    fn test_from_collection_drops_duplicate_keys() {
        let mut cells = collection(0..3);
        cells.append(collection(2..4));

        let set = SelectionSet::from_collection(cells);
        assert_eq!(set.len(), 4, "duplicate quad keys collapse on restore");
    }

    #[test]
    fn test_drag_session_lifecycle() {
        let anchor = LngLat::new(0.5, 0.5);
        let mut session = DragSession::new(anchor, collection([1]));

        assert_eq!(session.anchor(), anchor);
        assert!(session.last_move().is_none());
        assert_eq!(session.transient().len(), 1);

        let moved = LngLat::new(0.9, 0.5);
        session.accept_move(moved, collection(1..4));
        assert_eq!(session.last_move(), Some(moved));
        assert_eq!(session.transient().len(), 3);

        let transient = session.into_transient();
        assert_eq!(transient.len(), 3);
    }
}
