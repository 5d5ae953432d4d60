use pinyin_tone_dict::config;
use pinyin_tone_dict::dict_gen;

use std::fs::File;
use std::io::{BufWriter, Write};

use anyhow::Context;

fn main() -> anyhow::Result<()> {
    let entries = dict_gen::generate_entries();

    let file = File::create(config::OUTPUT_FILE)
        .with_context(|| format!("failed to create {}", config::OUTPUT_FILE))?;
    let mut writer = BufWriter::new(file);
    dict_gen::write_dict(&mut writer, &entries)
        .with_context(|| format!("failed to write {}", config::OUTPUT_FILE))?;
    writer.flush()?;

    println!("Generated {} pinyin entries", entries.len());
    println!("Saved as: {}", config::OUTPUT_FILE);
    Ok(())
}
