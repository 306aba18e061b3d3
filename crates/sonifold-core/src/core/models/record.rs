/// One side-chain atom entry extracted from the structure file.
///
/// Records are produced in file order by the loader and consumed read-only by the
/// event generator; every field comes straight from a fixed token position on an
/// `ATOM` line.
#[derive(Debug, Clone, PartialEq)]
pub struct SideChainRecord {
    /// Three-letter amino-acid code (e.g. "PHE"), as written in the file.
    pub amino_acid: String,
    /// Chain number the atom belongs to.
    pub chain: u32,
    /// Asymmetric-unit letter.
    pub asym: char,
    /// Entity number within the assembly.
    pub entity: u32,
    /// B factor (thermal/flexibility value) of the atom.
    pub b_factor: f64,
    /// Residue sequence number, used for secondary-structure membership tests.
    pub site: i64,
}
