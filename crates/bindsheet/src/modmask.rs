//! Modifier bit-mask decoding.

use crate::tables::ModifierTable;

fn bit_set(mask: u64, bit: usize) -> bool {
    u32::try_from(bit)
        .ok()
        .and_then(|bit| mask.checked_shr(bit))
        .is_some_and(|shifted| shifted & 1 == 1)
}

/// Converts `mask` into the symbols of its held modifiers.
///
/// Bit `i` selects `symbols[i]`. If the `primary` bit is held its symbol
/// comes first; the rest follow in ascending bit order. Bits past the end
/// of `symbols` are ignored, and so is a `primary` index past the end.
///
/// # Example
///
/// ```rust
/// use bindsheet::modmask::decode_modmask;
///
/// let symbols = ["S", "C", "A", "M"];
/// assert_eq!(decode_modmask(0b1011, &symbols, 3), vec!["M", "S", "C"]);
/// assert!(decode_modmask(0, &symbols, 3).is_empty());
/// ```
pub fn decode_modmask<'a>(mask: u64, symbols: &[&'a str], primary: usize) -> Vec<&'a str> {
    let mut found = Vec::new();
    let mut rest = mask;

    if primary < symbols.len() && bit_set(mask, primary) {
        found.push(symbols[primary]);
        rest &= !(1u64 << primary);
    }

    found.extend(
        symbols
            .iter()
            .enumerate()
            .filter(|(bit, _)| bit_set(rest, *bit))
            .map(|(_, symbol)| *symbol),
    );
    found
}

impl ModifierTable {
    /// Decodes `mask` against this table, primary modifier first.
    pub fn decode(&self, mask: u64) -> Vec<&'static str> {
        let symbols: Vec<&'static str> = self.symbols().collect();
        decode_modmask(mask, &symbols, self.primary())
    }
}
