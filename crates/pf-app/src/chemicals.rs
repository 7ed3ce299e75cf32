//! Chemical library: the seed catalog plus user additions, and the selection
//! the flowsheet works with.

use pf_core::ChemicalId;
use pf_model::{Chemical, NewChemical, seed_chemicals, slugify};

use crate::error::{AppError, AppResult};

/// Slug used when a custom name has no alphanumeric characters.
const FALLBACK_SLUG: &str = "custom";

#[derive(Debug, Clone, PartialEq)]
pub struct ChemicalLibrary {
    chemicals: Vec<Chemical>,
    selected: Vec<ChemicalId>,
}

impl Default for ChemicalLibrary {
    fn default() -> Self {
        Self::new()
    }
}

impl ChemicalLibrary {
    /// Library holding the seed catalog, nothing selected.
    pub fn new() -> Self {
        Self::with_chemicals(seed_chemicals())
    }

    pub fn with_chemicals(chemicals: Vec<Chemical>) -> Self {
        Self {
            chemicals,
            selected: Vec::new(),
        }
    }

    pub fn all(&self) -> &[Chemical] {
        &self.chemicals
    }

    pub fn len(&self) -> usize {
        self.chemicals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chemicals.is_empty()
    }

    pub fn get(&self, id: &ChemicalId) -> Option<&Chemical> {
        self.chemicals.iter().find(|c| &c.id == id)
    }

    /// Chemicals whose name or formula contains `query`, ignoring case.
    pub fn search<'a>(&'a self, query: &str) -> Vec<&'a Chemical> {
        self.chemicals
            .iter()
            .filter(|c| c.matches_query(query))
            .collect()
    }

    /// Add `id` to the selection. Selecting twice is a no-op.
    pub fn select(&mut self, id: &ChemicalId) -> AppResult<()> {
        if self.get(id).is_none() {
            return Err(AppError::UnknownChemical(id.to_string()));
        }
        if !self.is_selected(id) {
            self.selected.push(id.clone());
        }
        Ok(())
    }

    /// Remove `id` from the selection; `false` when it was not selected.
    pub fn deselect(&mut self, id: &ChemicalId) -> bool {
        let before = self.selected.len();
        self.selected.retain(|s| s != id);
        self.selected.len() != before
    }

    pub fn is_selected(&self, id: &ChemicalId) -> bool {
        self.selected.contains(id)
    }

    /// Selected chemicals in selection order.
    pub fn selected(&self) -> Vec<&Chemical> {
        self.selected.iter().filter_map(|id| self.get(id)).collect()
    }

    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    /// Append a user-defined chemical and return the id it was given.
    ///
    /// The id is the slug of the name, suffixed `-2`, `-3`, ... when the slug
    /// is already taken.
    pub fn add_custom(&mut self, chemical: NewChemical) -> AppResult<ChemicalId> {
        let id = self.unique_id(&chemical.name);
        let chemical = chemical.into_chemical(id.clone())?;
        self.chemicals.push(chemical);
        Ok(id)
    }

    fn unique_id(&self, name: &str) -> ChemicalId {
        let mut base = slugify(name);
        if base.is_empty() {
            base = FALLBACK_SLUG.to_string();
        }

        let mut candidate = ChemicalId::new(base.clone());
        let mut suffix = 2;
        while self.get(&candidate).is_some() {
            candidate = ChemicalId::new(format!("{base}-{suffix}"));
            suffix += 1;
        }
        candidate
    }
}
