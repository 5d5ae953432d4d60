//! Dictionary table generation and serialization.
//!
//! Walks the syllable catalog in order, renders each syllable with tones
//! 1 through 5 and writes the result as a Rime dictionary file: a fixed
//! YAML-ish header followed by `rendered<TAB>input_code` lines.

use itertools::Itertools;
use std::io::{self, Write};

use crate::config;
use crate::pinyin;
use crate::syllables::SYLLABLES;

/// One dictionary line: the rendered pinyin and the numeric-tone code
/// typed to produce it (e.g. `bei3` for `běi`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Entry {
    pub output: String,
    pub input_code: String,
}

/// Generate the full entry table: catalog order, tones ascending,
/// deduplicated by exact pair equality keeping the first occurrence.
/// A well-formed catalog produces no duplicates, the dedup guards
/// against repeated catalog rows.
pub fn generate_entries() -> Vec<Entry> {
    SYLLABLES
        .iter()
        .copied()
        .cartesian_product(1..=5u8)
        .map(|(syllable, tone)| Entry {
            output: pinyin::add_tone(syllable, tone),
            input_code: format!("{}{}", syllable, tone),
        })
        .unique()
        .collect()
}

/// Write the dictionary header and all entries.
pub fn write_dict(writer: &mut dyn Write, entries: &[Entry]) -> io::Result<()> {
    writeln!(writer, "---")?;
    writeln!(writer, "name: {}", config::DICT_NAME)?;
    writeln!(writer, "version: \"{}\"", config::DICT_VERSION)?;
    writeln!(writer, "sort: {}", config::DICT_SORT)?;
    writeln!(writer, "...")?;
    writeln!(writer)?;

    for entry in entries {
        writeln!(writer, "{}\t{}", entry.output, entry.input_code)?;
    }
    Ok(())
}
