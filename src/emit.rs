//! Serializing a [`KeyTable`] to TypeScript source.
//!
//! The layout matches the previous generator byte for byte: one literal per
//! line, two spaces of indentation per nesting level, trailing commas and a
//! blank line between declarations. Each value is written as a `bigint`
//! literal with exactly 16 lowercase hex digits.

use crate::tables::KeyTable;
use std::io::{self, Write};

pub fn write_typescript<W: Write>(out: &mut W, table: &KeyTable) -> io::Result<()> {
    writeln!(out, "export const ZOBRIST_PIECE: bigint[][] = [")?;
    for row in &table.piece {
        writeln!(out, "  [")?;
        for &key in row {
            writeln!(out, "    {},", literal(key))?;
        }
        writeln!(out, "  ],")?;
    }
    writeln!(out, "];")?;
    writeln!(out)?;

    writeln!(out, "export const ZOBRIST_CASTLING: bigint[] = [")?;
    for &key in &table.castling {
        writeln!(out, "  {},", literal(key))?;
    }
    writeln!(out, "];")?;
    writeln!(out)?;

    writeln!(out, "export const ZOBRIST_ENPASSANT: bigint[] = [")?;
    for &key in &table.en_passant {
        writeln!(out, "  {},", literal(key))?;
    }
    writeln!(out, "];")?;
    writeln!(out)?;

    writeln!(
        out,
        "export const ZOBRIST_SIDE: bigint = {};",
        literal(table.side_to_move)
    )
}

fn literal(key: u64) -> String {
    format!("0x{key:016x}n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GeneratorConfig;
    use lazy_regex::regex;

    fn rendered() -> String {
        let table = KeyTable::generate(&GeneratorConfig::default());
        let mut buffer = Vec::new();
        write_typescript(&mut buffer, &table).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn literals_are_full_width_lowercase_hex() {
        let output = rendered();
        let bigint = regex!(r"0x[0-9a-fA-F]+n");
        let mut count = 0;
        for found in bigint.find_iter(&output) {
            assert!(
                regex!(r"^0x[0-9a-f]{16}n$").is_match(found.as_str()),
                "malformed literal: {}",
                found.as_str()
            );
            count += 1;
        }
        assert_eq!(count, 15 * 64 + 16 + 8 + 1);
    }

    #[test]
    fn literals_parse_back_as_u64() {
        let output = rendered();
        for found in regex!(r"0x([0-9a-f]{16})n").captures_iter(&output) {
            assert!(u64::from_str_radix(&found[1], 16).is_ok());
        }
    }

    #[test]
    fn declarations_appear_in_order() {
        let output = rendered();
        let piece = output.find("export const ZOBRIST_PIECE: bigint[][] = [").unwrap();
        let castling = output.find("export const ZOBRIST_CASTLING: bigint[] = [").unwrap();
        let en_passant = output.find("export const ZOBRIST_ENPASSANT: bigint[] = [").unwrap();
        let side = output.find("export const ZOBRIST_SIDE: bigint = ").unwrap();
        assert!(piece < castling && castling < en_passant && en_passant < side);
    }

    #[test]
    fn layout_matches_the_legacy_generator() {
        let output = rendered();
        assert!(output.starts_with(
            "export const ZOBRIST_PIECE: bigint[][] = [\n  [\n    0xcb7c61249e325b43n,\n"
        ));
        assert!(output.ends_with(
            "export const ZOBRIST_SIDE: bigint = 0x5f62e92b0f7f3ad1n;\n"
        ));
        assert!(output.contains("];\n\nexport const ZOBRIST_CASTLING"));
    }

    #[test]
    fn serialization_is_deterministic() {
        assert_eq!(rendered(), rendered());
    }
}
