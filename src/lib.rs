//! Generator for the Zobrist key tables of the TypeScript engine.
//!
//! A single run seeds a deterministic key stream, draws 985 keys in a fixed
//! order and writes them to `zobristKeys.ts` as typed constant arrays. The
//! output replaces the tables produced by the legacy Python generator, so
//! both the stream (CPython's MT19937, see [`rng`]) and the file layout
//! (see [`emit`]) reproduce it exactly.

pub mod config;
pub mod emit;
pub mod rng;
pub mod tables;

pub use config::GeneratorConfig;
pub use tables::KeyTable;

use std::fs::File;
use std::io::{BufWriter, Write};

#[derive(thiserror::Error, Debug)]
pub enum KeygenError {
    #[error("Could not write the key table: {0}")]
    Io(#[from] std::io::Error),
}

/// Generates the key table and writes it to `config.output_path`, overwriting
/// any previous file.
pub fn run(config: &GeneratorConfig) -> Result<(), KeygenError> {
    let table = KeyTable::generate(config);

    let mut out = BufWriter::new(File::create(&config.output_path)?);
    emit::write_typescript(&mut out, &table)?;
    out.flush()?;

    Ok(())
}
