//! Tree Model
//!
//! The canonical in-memory snapshot of spaces and communities. The tree
//! exposes read-only traversal and structural queries; all changes go
//! through the mutation engine as whole-tree replacement, so observers
//! always see a consistent snapshot, never a half-applied mutation.

use super::community::Community;
use super::space::Space;

/// Ordered collection of spaces; insertion order is display order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tree {
    spaces: Vec<Space>,
}

impl Tree {
    pub fn new(spaces: Vec<Space>) -> Self {
        Self { spaces }
    }

    pub fn spaces(&self) -> &[Space] {
        &self.spaces
    }

    pub fn len(&self) -> usize {
        self.spaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spaces.is_empty()
    }

    pub fn find_space(&self, space_id: &str) -> Option<&Space> {
        self.spaces.iter().find(|s| s.id == space_id)
    }

    pub fn find_community(&self, space_id: &str, community_id: &str) -> Option<&Community> {
        self.find_space(space_id)?.find_community(community_id)
    }

    // Mutators are crate-private: the engine is the only writer.

    pub(crate) fn find_space_mut(&mut self, space_id: &str) -> Option<&mut Space> {
        self.spaces.iter_mut().find(|s| s.id == space_id)
    }

    pub(crate) fn push_space(&mut self, space: Space) {
        self.spaces.push(space);
    }

    pub(crate) fn remove_space(&mut self, space_id: &str) -> Option<Space> {
        let index = self.spaces.iter().position(|s| s.id == space_id)?;
        Some(self.spaces.remove(index))
    }

    pub(crate) fn remove_community(
        &mut self,
        space_id: &str,
        community_id: &str,
    ) -> Option<Community> {
        let space = self.find_space_mut(space_id)?;
        let index = space.communities.iter().position(|c| c.id == community_id)?;
        Some(space.communities.remove(index))
    }

    /// The built-in organization structure shipped with the app.
    ///
    /// Used to seed a fresh store and as a realistic fixture in tests.
    pub fn seed() -> Self {
        let mut admin = Space::new("admin", "Amministrazione e HR", "bg-blue-100");
        admin.communities = vec![
            Community::new("1", "Comunicazioni HR"),
            Community::new("2", "Richieste viaggi e trasferte"),
            Community::new("3", "Richieste ferie/permessi"),
            Community::new("4", "Documentazione amministrativa"),
            Community::new("5", "Welfare aziendale"),
        ];

        let mut commercial = Space::new("commercial", "Commerciale", "bg-green-100");
        commercial.communities = vec![
            Community::new("6", "Comunicazioni commerciali"),
            Community::new("7", "Offerte progetto"),
            Community::new("8", "Demo e POC"),
            Community::new("9", "Segnalazioni clienti"),
            Community::new("10", "Opportunità commerciali"),
        ];

        let mut technical = Space::new("technical", "Tecnico", "bg-yellow-100");
        technical.communities = vec![
            Community::new("11", "R&D"),
            Community::new("12", "Delivery"),
            Community::new("13", "Assistenza e supporto"),
            Community::new("14", "Cloud & DevSecOps"),
            Community::new("15", "Documentazione tecnica"),
        ];

        let mut operations = Space::new("operations", "Operations", "bg-purple-100");
        operations.communities = vec![
            Community::new("16", "Ticket IT interni"),
            Community::new("17", "Facility management"),
            Community::new("18", "Richieste acquisti"),
            Community::new("19", "Asset aziendali"),
        ];

        let mut corporate = Space::new("corporate", "Aziendale", "bg-red-100");
        corporate.communities = vec![
            Community::new("20", "Comunicazioni corporate"),
            Community::new("21", "Eventi aziendali"),
            Community::new("22", "Mercatomania (social)"),
            Community::new("23", "Formazione"),
            Community::new("24", "Certificazioni e compliance"),
        ];

        Self::new(vec![admin, commercial, technical, operations, corporate])
    }
}

impl<'a> IntoIterator for &'a Tree {
    type Item = &'a Space;
    type IntoIter = std::slice::Iter<'a, Space>;

    fn into_iter(self) -> Self::IntoIter {
        self.spaces.iter()
    }
}
