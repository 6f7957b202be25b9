use std::collections::HashMap;

///
/// The growing half of the index registry: motif identifiers are assigned
/// dense column ids in the order they are first seen while the scan report
/// streams. Once assigned, a motif's column never changes; the final column
/// order of the matrix is exactly this first-occurrence order.
///
#[derive(Clone, Debug, Default)]
pub struct MotifIndex {
    ids: Vec<String>,
    id_to_col: HashMap<String, u32>,
}

impl MotifIndex {
    pub fn new() -> Self {
        MotifIndex::default()
    }

    /// Return the column for `id`, assigning the next sequential column if
    /// the identifier has not been seen before. Idempotent for repeated ids.
    pub fn resolve_or_insert(&mut self, id: &str) -> u32 {
        if let Some(col) = self.id_to_col.get(id) {
            return *col;
        }

        let new_col = self.ids.len() as u32;
        self.id_to_col.insert(id.to_owned(), new_col);
        self.ids.push(id.to_owned());
        new_col
    }

    pub fn col(&self, id: &str) -> Option<u32> {
        self.id_to_col.get(id).copied()
    }

    /// Motif identifiers in discovery order; index in this slice == column.
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
