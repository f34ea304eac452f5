//! 256-bit byte sets used as character classes by the pattern engine.
//!
//! All constructors are `const`, so the shell character classes below are
//! computed at compile time and cost nothing at table construction.

use std::fmt;

/// A set of byte values, stored as four 64-bit words.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ByteSet([u64; 4]);

const _: () = assert!(std::mem::size_of::<ByteSet>() == 32);

impl ByteSet {
    /// The set containing no bytes.
    pub const EMPTY: Self = Self([0; 4]);

    /// The set containing every byte.
    pub const ALL: Self = Self([u64::MAX; 4]);

    /// Build a set from an explicit list of bytes.
    pub const fn from_bytes(bytes: &[u8]) -> Self {
        let mut set = Self::EMPTY;
        let mut i = 0;
        while i < bytes.len() {
            set = set.with(bytes[i]);
            i += 1;
        }
        set
    }

    /// Build the inclusive range `lo..=hi`.
    pub const fn range(lo: u8, hi: u8) -> Self {
        let mut set = Self::EMPTY;
        let mut b = lo;
        while b <= hi {
            set = set.with(b);
            if b == hi {
                break;
            }
            b += 1;
        }
        set
    }

    /// Returns a copy of this set with `byte` added.
    pub const fn with(self, byte: u8) -> Self {
        let mut words = self.0;
        words[(byte >> 6) as usize] |= 1 << (byte & 63);
        Self(words)
    }

    /// Set union.
    pub const fn union(self, other: Self) -> Self {
        Self([
            self.0[0] | other.0[0],
            self.0[1] | other.0[1],
            self.0[2] | other.0[2],
            self.0[3] | other.0[3],
        ])
    }

    /// Every byte not in this set.
    pub const fn complement(self) -> Self {
        Self([!self.0[0], !self.0[1], !self.0[2], !self.0[3]])
    }

    /// Every byte except the listed ones. Shorthand for `[^...]`.
    pub const fn none_of(bytes: &[u8]) -> Self {
        Self::from_bytes(bytes).complement()
    }

    #[inline]
    pub const fn contains(self, byte: u8) -> bool {
        self.0[(byte >> 6) as usize] & (1 << (byte & 63)) != 0
    }

    pub const fn is_empty(self) -> bool {
        self.0[0] == 0 && self.0[1] == 0 && self.0[2] == 0 && self.0[3] == 0
    }

    /// Number of bytes in the set.
    pub const fn len(self) -> u32 {
        self.0[0].count_ones()
            + self.0[1].count_ones()
            + self.0[2].count_ones()
            + self.0[3].count_ones()
    }

    /// Iterate over member bytes in ascending order.
    pub fn iter(self) -> impl Iterator<Item = u8> {
        (0..=u8::MAX).filter(move |&b| self.contains(b))
    }
}

impl fmt::Debug for ByteSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Small sets print their members; large ones print what they exclude.
        let (negated, shown) = if self.len() > 128 {
            (true, self.complement())
        } else {
            (false, *self)
        };
        f.write_str(if negated { "[^" } else { "[" })?;
        for b in shown.iter() {
            write!(f, "{}", std::ascii::escape_default(b))?;
        }
        f.write_str("]")
    }
}

/// `[0-9]`
pub const DIGIT: ByteSet = ByteSet::range(b'0', b'9');

/// `[0-7]`
pub const OCTAL: ByteSet = ByteSet::range(b'0', b'7');

/// `[0-9a-fA-F]`
pub const HEX: ByteSet = DIGIT
    .union(ByteSet::range(b'a', b'f'))
    .union(ByteSet::range(b'A', b'F'));

/// First byte of a variable name: `[a-zA-Z_]`.
pub const NAME_START: ByteSet = ByteSet::range(b'a', b'z')
    .union(ByteSet::range(b'A', b'Z'))
    .with(b'_');

/// Subsequent bytes of a variable name: `[a-zA-Z0-9_]`.
pub const NAME_CONT: ByteSet = NAME_START.union(DIGIT);

/// Any byte except the NUL terminator and newline.
pub const NOT_NUL_OR_NEWLINE: ByteSet = ByteSet::none_of(b"\0\n");

/// Any byte except the NUL terminator.
pub const NOT_NUL: ByteSet = ByteSet::none_of(b"\0");

/// Horizontal whitespace that separates words: `[ \t\r]`.
pub const BLANK: ByteSet = ByteSet::from_bytes(b" \t\r");
