//! Alphabet definition and input normalization.

/// Ordered set of symbols defining the symbol <-> index bijection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alphabet {
    symbols: &'static [u8],
}

/// The 26-letter uppercase Latin alphabet.
pub const LATIN: Alphabet = Alphabet {
    symbols: b"ABCDEFGHIJKLMNOPQRSTUVWXYZ",
};

impl Alphabet {
    /// Number of symbols, which is also the cipher modulus.
    pub fn len(&self) -> u32 {
        self.symbols.len() as u32
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Alias for `len`, reads better in arithmetic.
    pub fn modulus(&self) -> u32 {
        self.len()
    }

    /// Index of `symbol`, or `None` when it is not part of the alphabet.
    pub fn index_of(&self, symbol: char) -> Option<u32> {
        if !symbol.is_ascii() {
            return None;
        }
        self.symbols
            .iter()
            .position(|&s| s == symbol as u8)
            .map(|i| i as u32)
    }

    /// Symbol at `index` (taken mod the alphabet length).
    pub fn symbol_at(&self, index: u32) -> char {
        self.symbols[(index % self.len()) as usize] as char
    }

    pub fn contains(&self, symbol: char) -> bool {
        self.index_of(symbol).is_some()
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        LATIN
    }
}

/// Strip surrounding whitespace and upper-case the input.
pub fn normalize(input: &str) -> String {
    input.trim().to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latin_has_26_symbols() {
        assert_eq!(LATIN.len(), 26);
        assert_eq!(LATIN.modulus(), 26);
        assert!(!LATIN.is_empty());
    }

    #[test]
    fn test_index_bijection() {
        for i in 0..26 {
            let symbol = LATIN.symbol_at(i);
            assert_eq!(LATIN.index_of(symbol), Some(i));
        }
        assert_eq!(LATIN.index_of('A'), Some(0));
        assert_eq!(LATIN.index_of('Z'), Some(25));
    }

    #[test]
    fn test_non_members() {
        assert_eq!(LATIN.index_of('a'), None);
        assert_eq!(LATIN.index_of(' '), None);
        assert_eq!(LATIN.index_of('{'), None);
        assert_eq!(LATIN.index_of('É'), None);
        assert!(!LATIN.contains('1'));
    }

    #[test]
    fn test_symbol_at_wraps() {
        assert_eq!(LATIN.symbol_at(26), 'A');
        assert_eq!(LATIN.symbol_at(27), 'B');
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("  xeh \n"), "XEH");
        assert_eq!(normalize("Hello, World"), "HELLO, WORLD");
        assert_eq!(normalize("   "), "");
    }
}
