//! This module defines the configuration record for a generation run. The
//! values are baked-in constants rather than runtime inputs, but they are
//! passed around explicitly instead of living as module level globals.

use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Seed for the key stream. Changing this invalidates every previously
    /// generated table.
    pub seed: u32,
    /// Number of piece kinds in the engine's piece encoding.
    pub num_pieces: usize,
    /// Number of board squares.
    pub num_squares: usize,
    /// Number of castling rights combinations (4 flags).
    pub num_castling: usize,
    /// Number of files an en passant square can be on.
    pub num_ep_files: usize,
    /// Where the generated TypeScript file is written.
    pub output_path: PathBuf,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            seed: 29426028,
            num_pieces: 15,
            num_squares: 64,
            num_castling: 16,
            num_ep_files: 8,
            output_path: PathBuf::from("zobristKeys.ts"),
        }
    }
}
