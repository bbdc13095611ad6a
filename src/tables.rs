//! Building the key table by consuming the stream in a fixed order.

use crate::config::GeneratorConfig;
use crate::rng::KeyStream;

/// All Zobrist keys of one generation run. For the default configuration this
/// is 15 * 64 + 16 + 8 + 1 = 985 values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyTable {
    /// One row per piece kind, one key per square within a row.
    pub piece: Vec<Vec<u64>>,
    /// One key per castling rights combination.
    pub castling: Vec<u64>,
    /// One key per en passant file.
    pub en_passant: Vec<u64>,
    /// Hashed in when black is to move.
    pub side_to_move: u64,
}

impl KeyTable {
    /// Draws all keys from a freshly seeded stream. The draw order is
    /// piece rows (square-major within a row), then castling, then en
    /// passant, then side to move. Reordering any of these shifts every
    /// later key and breaks compatibility with shipped tables.
    pub fn generate(config: &GeneratorConfig) -> KeyTable {
        let mut stream = KeyStream::new(config.seed);

        let piece = (0..config.num_pieces)
            .map(|_| (0..config.num_squares).map(|_| stream.next_key()).collect())
            .collect();
        let castling = (0..config.num_castling).map(|_| stream.next_key()).collect();
        let en_passant = (0..config.num_ep_files).map(|_| stream.next_key()).collect();
        let side_to_move = stream.next_key();

        KeyTable {
            piece,
            castling,
            en_passant,
            side_to_move,
        }
    }
}
