use crate::flatten::row::PlayerRow;
use crate::types::PlayerId;
use std::collections::HashMap;

/// Player rows keyed by participant id, iterated in first-insertion order
#[derive(Debug, Clone, Default)]
pub struct PlayerTable {
    rows: Vec<(PlayerId, PlayerRow)>,
    index: HashMap<PlayerId, usize>,
}

impl PlayerTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&PlayerRow> {
        self.index.get(id).map(|&idx| &self.rows[idx].1)
    }

    /// Row for `id`, created empty if absent
    pub fn entry(&mut self, id: &str) -> &mut PlayerRow {
        self.get_or_insert_with(id, PlayerRow::new)
    }

    /// Row for `id`; `make` builds it only when the id is new
    pub fn get_or_insert_with<F>(&mut self, id: &str, make: F) -> &mut PlayerRow
    where
        F: FnOnce() -> PlayerRow,
    {
        let idx = match self.index.get(id) {
            Some(&idx) => idx,
            None => self.push(PlayerId::new(id), make()),
        };
        &mut self.rows[idx].1
    }

    /// Insert a row, replacing (in place) any existing row with the same id
    pub fn insert(&mut self, id: PlayerId, row: PlayerRow) -> Option<PlayerRow> {
        match self.index.get(&id) {
            Some(&idx) => Some(std::mem::replace(&mut self.rows[idx].1, row)),
            None => {
                self.push(id, row);
                None
            }
        }
    }

    /// Move every row of `other` into this table.
    ///
    /// Rows are replaced whole, never merged field by field. Returns the ids
    /// that were already present.
    pub fn absorb(&mut self, other: PlayerTable) -> Vec<PlayerId> {
        let mut replaced = Vec::new();
        for (id, row) in other.rows {
            if self.insert(id.clone(), row).is_some() {
                replaced.push(id);
            }
        }
        replaced
    }

    pub fn iter(&self) -> impl Iterator<Item = (&PlayerId, &PlayerRow)> {
        self.rows.iter().map(|(id, row)| (id, row))
    }

    pub fn rows_mut(&mut self) -> impl Iterator<Item = &mut PlayerRow> {
        self.rows.iter_mut().map(|(_, row)| row)
    }

    pub fn ids(&self) -> impl Iterator<Item = &PlayerId> {
        self.rows.iter().map(|(id, _)| id)
    }

    fn push(&mut self, id: PlayerId, row: PlayerRow) -> usize {
        let idx = self.rows.len();
        self.index.insert(id.clone(), idx);
        self.rows.push((id, row));
        idx
    }
}
