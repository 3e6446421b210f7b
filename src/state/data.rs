//! Shared data structures for the application state
//!
//! These structs represent the data model that flows between
//! the view components and the application controller.

use std::fmt;

/// A garment the user can customize
///
/// The catalog is compiled into the client, so every field is `'static`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClothingOption {
    /// Stable identifier (e.g., "hoodie")
    pub id: &'static str,
    /// Label shown in the selector
    pub name: &'static str,
    /// Template reference sent to the backend as `clothing_template`
    pub template: &'static str,
}

// pick_list renders options through Display
impl fmt::Display for ClothingOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// The fixed garment catalog
pub const CATALOG: [ClothingOption; 2] = [
    ClothingOption {
        id: "tshirt",
        name: "T-Shirt",
        template: "/templates/tshirt.png",
    },
    ClothingOption {
        id: "hoodie",
        name: "Hoodie",
        template: "/templates/hoodie.png",
    },
];

/// All catalog entries, in display order
pub fn catalog() -> &'static [ClothingOption] {
    &CATALOG
}

/// Look up a catalog entry by its identifier
#[cfg(test)]
pub fn find(id: &str) -> Option<ClothingOption> {
    CATALOG.iter().copied().find(|option| option.id == id)
}

/// How request failures are reported to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// Log to the operator console only; the UI keeps its previous state
    #[default]
    LogOnly,
    /// Log and also show a status line in the window
    Surface,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hoodie_lookup_yields_full_record() {
        let hoodie = find("hoodie").unwrap();
        assert_eq!(
            hoodie,
            ClothingOption {
                id: "hoodie",
                name: "Hoodie",
                template: "/templates/hoodie.png",
            }
        );
    }

    #[test]
    fn test_every_entry_is_found_by_its_own_id() {
        for option in catalog() {
            assert_eq!(find(option.id), Some(*option));
        }
    }

    #[test]
    fn test_catalog_ids_are_unique() {
        let ids: Vec<&str> = catalog().iter().map(|o| o.id).collect();
        let mut deduped = ids.clone();
        deduped.sort_unstable();
        deduped.dedup();
        assert_eq!(ids.len(), deduped.len());
    }

    #[test]
    fn test_unknown_id_yields_nothing() {
        assert_eq!(find("sweater"), None);
        assert_eq!(find(""), None);
    }

    #[test]
    fn test_display_uses_name() {
        assert_eq!(find("tshirt").unwrap().to_string(), "T-Shirt");
    }
}
