use crate::core::models::ranges::StructuralRangeSet;
use crate::core::models::record::SideChainRecord;
use crate::core::utils::identifiers::is_backbone_atom;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use thiserror::Error;
use tracing::warn;

// Token indices on an ATOM line. The format is positional: field meaning is
// determined solely by token index, a fixed contract with the file producer.
const ATOM_SITE_IDX: usize = 1;
const ATOM_NAME_IDX: usize = 3;
const ATOM_COMP_IDX: usize = 5;
const ATOM_ASYM_IDX: usize = 6;
const ATOM_ENTITY_IDX: usize = 7;
const ATOM_CHAIN_IDX: usize = 8;
const ATOM_B_FACTOR_IDX: usize = 14;
const ATOM_MIN_TOKENS: usize = ATOM_B_FACTOR_IDX + 1;

// Token indices on a HELX_P declaration line.
const HELIX_BEGIN_IDX: usize = 5;
const HELIX_END_IDX: usize = 9;
const HELIX_MIN_TOKENS: usize = HELIX_END_IDX + 1;

// Token indices on a sheet-range row inside the sheet block.
const SHEET_BEGIN_IDX: usize = 4;
const SHEET_END_IDX: usize = 8;
const SHEET_MIN_TOKENS: usize = SHEET_END_IDX + 1;

// Sheet ranges are declared across a run of rows bounded by the last column
// header of the loop and a section terminator.
const SHEET_BLOCK_MARKER: &str = "_struct_sheet_range.end_auth_seq_id";
const SECTION_TERMINATOR: &str = "#";

#[derive(Debug, Error)]
pub enum StructureError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Sheet-range block opened on line {start_line} was never terminated by '#'")]
    UnterminatedSheetBlock { start_line: usize },
}

/// Reader for the whitespace-tokenized crystal-structure record format.
pub struct CifFile;

impl CifFile {
    /// Opens `path` and parses it into side-chain records and structure ranges.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or a sheet-range block is
    /// left open at end of file.
    pub fn load<P: AsRef<Path>>(
        path: P,
    ) -> Result<(Vec<SideChainRecord>, StructuralRangeSet), StructureError> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        Self::read_from(&mut reader)
    }

    /// Parses the structure file from a buffered reader.
    ///
    /// Lines matching no recognizer are ignored. A recognized line that is too
    /// short for the fields its recognizer requires, or that carries a
    /// non-numeric value where an ordinal is expected, is skipped with a
    /// warning rather than aborting the parse.
    pub fn read_from(
        reader: &mut impl BufRead,
    ) -> Result<(Vec<SideChainRecord>, StructuralRangeSet), StructureError> {
        let mut records = Vec::new();
        let mut ranges = StructuralRangeSet::new();
        let mut sheet_block_start: Option<usize> = None;

        for (line_num, line_res) in reader.lines().enumerate() {
            let line = line_res?;
            let line_num = line_num + 1;

            let tokens: Vec<&str> = line.split_whitespace().collect();
            let Some(&first) = tokens.first() else {
                continue;
            };

            match first {
                "HELX_P" => {
                    if tokens.len() < HELIX_MIN_TOKENS {
                        warn!(line = line_num, "Helix declaration too short, skipping");
                        continue;
                    }
                    let (Some(begin), Some(end)) = (
                        parse_ordinal(tokens[HELIX_BEGIN_IDX]),
                        parse_ordinal(tokens[HELIX_END_IDX]),
                    ) else {
                        warn!(line = line_num, "Non-numeric helix bounds, skipping");
                        continue;
                    };
                    ranges.add_helix_range(begin, end);
                }
                SHEET_BLOCK_MARKER => {
                    sheet_block_start = Some(line_num);
                }
                SECTION_TERMINATOR => {
                    sheet_block_start = None;
                }
                "ATOM" => {
                    if tokens.len() < ATOM_MIN_TOKENS {
                        warn!(line = line_num, "ATOM line too short, skipping");
                        continue;
                    }
                    if is_backbone_atom(tokens[ATOM_NAME_IDX]) {
                        continue;
                    }
                    let Some(record) = parse_side_chain_atom(&tokens) else {
                        warn!(line = line_num, "Malformed ATOM fields, skipping");
                        continue;
                    };
                    records.push(record);
                }
                _ if sheet_block_start.is_some() => {
                    if tokens.len() < SHEET_MIN_TOKENS {
                        warn!(line = line_num, "Sheet-range row too short, skipping");
                        continue;
                    }
                    let (Some(begin), Some(end)) = (
                        parse_ordinal(tokens[SHEET_BEGIN_IDX]),
                        parse_ordinal(tokens[SHEET_END_IDX]),
                    ) else {
                        warn!(line = line_num, "Non-numeric sheet bounds, skipping");
                        continue;
                    };
                    ranges.add_sheet_range(begin, end);
                }
                _ => {}
            }
        }

        if let Some(start_line) = sheet_block_start {
            return Err(StructureError::UnterminatedSheetBlock { start_line });
        }
        Ok((records, ranges))
    }
}

fn parse_ordinal(token: &str) -> Option<i64> {
    token.parse().ok()
}

fn parse_side_chain_atom(tokens: &[&str]) -> Option<SideChainRecord> {
    Some(SideChainRecord {
        amino_acid: tokens[ATOM_COMP_IDX].to_string(),
        chain: tokens[ATOM_CHAIN_IDX].parse().ok()?,
        asym: tokens[ATOM_ASYM_IDX].chars().next()?,
        entity: tokens[ATOM_ENTITY_IDX].parse().ok()?,
        b_factor: tokens[ATOM_B_FACTOR_IDX].parse().ok()?,
        site: tokens[ATOM_SITE_IDX].parse().ok()?,
    })
}
