use crate::core::models::event::ResidueCategory;
use phf::{Map, Set, phf_map, phf_set};

// The file producer already represents backbone geometry elsewhere, so CB is
// treated as backbone here even though it is chemically part of the side chain.
static BACKBONE_ATOM_NAMES: Set<&'static str> = phf_set! {
    "CA", "C", "N", "O", "CB",
};

// Kyte-Doolittle-style scale scaled to [-55, 100], as used by the sound design.
static HYDROPHOBICITY: Map<&'static str, i32> = phf_map! {
    "PHE" => 100,
    "ILE" => 99,
    "TRP" => 97,
    "LEU" => 97,
    "VAL" => 76,
    "MET" => 74,
    "TYR" => 63,
    "CYS" => 49,
    "ALA" => 41,
    "THR" => 13,
    "HCS" => 0,
    "GLY" => 0,
    "HIS" => 8,
    "SER" => -5,
    "GLN" => -10,
    "ARG" => -14,
    "LYS" => -23,
    "ASN" => -28,
    "GLU" => -31,
    "PRO" => -46,
    "ASP" => -55,
};

static CATEGORIES: Map<&'static str, ResidueCategory> = phf_map! {
    "PHE" => ResidueCategory::Aromatic,
    "TRP" => ResidueCategory::Aromatic,
    "TYR" => ResidueCategory::Aromatic,
    "ILE" => ResidueCategory::Aliphatic,
    "LEU" => ResidueCategory::Aliphatic,
    "VAL" => ResidueCategory::Aliphatic,
    "ALA" => ResidueCategory::Aliphatic,
    "MET" => ResidueCategory::Polar,
    "CYS" => ResidueCategory::Polar,
    "THR" => ResidueCategory::Polar,
    "SER" => ResidueCategory::Polar,
    "GLN" => ResidueCategory::Polar,
    "ASN" => ResidueCategory::Polar,
    "HIS" => ResidueCategory::Charged,
    "ARG" => ResidueCategory::Charged,
    "LYS" => ResidueCategory::Charged,
    "GLU" => ResidueCategory::Charged,
    "ASP" => ResidueCategory::Charged,
    "HCS" => ResidueCategory::Unique,
    "GLY" => ResidueCategory::Unique,
    "PRO" => ResidueCategory::Unique,
};

pub fn is_backbone_atom(atom_name: &str) -> bool {
    BACKBONE_ATOM_NAMES.contains(atom_name.trim())
}

pub fn hydrophobicity(amino_acid: &str) -> Option<i32> {
    HYDROPHOBICITY.get(amino_acid.trim()).copied()
}

pub fn category(amino_acid: &str) -> Option<ResidueCategory> {
    CATEGORIES.get(amino_acid.trim()).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn is_backbone_atom_recognizes_the_five_backbone_labels() {
        assert!(is_backbone_atom("CA"));
        assert!(is_backbone_atom("C"));
        assert!(is_backbone_atom("N"));
        assert!(is_backbone_atom("O"));
        assert!(is_backbone_atom("CB"));
    }

    #[test]
    fn is_backbone_atom_is_case_sensitive_and_trims_whitespace() {
        assert!(!is_backbone_atom("ca"));
        assert!(is_backbone_atom(" CA "));
        assert!(!is_backbone_atom("cb"));
    }

    #[test]
    fn is_backbone_atom_returns_false_for_side_chain_atoms() {
        assert!(!is_backbone_atom("CG"));
        assert!(!is_backbone_atom("SG"));
        assert!(!is_backbone_atom("OH"));
        assert!(!is_backbone_atom(""));
    }

    #[test]
    fn hydrophobicity_returns_known_scale_values() {
        assert_eq!(hydrophobicity("PHE"), Some(100));
        assert_eq!(hydrophobicity("GLY"), Some(0));
        assert_eq!(hydrophobicity("ASP"), Some(-55));
    }

    #[test]
    fn hydrophobicity_returns_none_for_unknown_codes() {
        assert_eq!(hydrophobicity("XYZ"), None);
        assert_eq!(hydrophobicity(""), None);
    }

    #[test]
    fn category_returns_known_classes() {
        assert_eq!(category("PHE"), Some(ResidueCategory::Aromatic));
        assert_eq!(category("VAL"), Some(ResidueCategory::Aliphatic));
        assert_eq!(category("SER"), Some(ResidueCategory::Polar));
        assert_eq!(category("LYS"), Some(ResidueCategory::Charged));
        assert_eq!(category("PRO"), Some(ResidueCategory::Unique));
    }

    #[test]
    fn lookups_trim_whitespace() {
        assert_eq!(hydrophobicity(" TRP "), Some(97));
        assert_eq!(category(" TRP "), Some(ResidueCategory::Aromatic));
    }

    #[test]
    fn both_tables_cover_the_same_vocabulary() {
        let hydro_keys: HashSet<_> = HYDROPHOBICITY.keys().collect();
        let category_keys: HashSet<_> = CATEGORIES.keys().collect();
        assert_eq!(hydro_keys, category_keys);
        assert_eq!(hydro_keys.len(), 21);
    }
}
