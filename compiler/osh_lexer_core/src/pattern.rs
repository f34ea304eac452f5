//! Hand-rolled finite-state patterns for rule tables.
//!
//! A [`Pattern`] is a small regular-expression tree built from the
//! constructor functions in this module ([`lit`], [`plus`], [`seq`], ...).
//! Matching simulates every alternative at once: [`Pattern::ends`] returns
//! the full set of positions where a match starting at `start` can end, so a
//! sequence such as `[0-9]*<` backtracks correctly without a backtracking
//! engine. [`Pattern::longest`] is the entry point the matcher uses.
//!
//! # Bounded work
//!
//! Every operator either consumes input or terminates: repetition stops as
//! soon as an iteration reaches no position it has not already produced.
//! Matching a pattern against a line is therefore bounded by the line length
//! times the pattern size, even for patterns that can match the empty string.
//!
//! # Delimiter runs
//!
//! Runs over "anything except a few bytes" (`[^'\0]+`, `[^\n\0]*`) are the
//! hot path inside quoted strings and comments. When a run's complement has
//! at most three bytes, it is scanned with `memchr` instead of byte-by-byte.

use memchr::{memchr, memchr2, memchr3};
use smallvec::{smallvec, SmallVec};

use crate::byte_set::ByteSet;

/// Sorted, deduplicated set of end positions.
pub type Ends = SmallVec<[usize; 8]>;

/// A compiled pattern. Build with the constructor functions in this module.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pattern(Node);

#[derive(Clone, Debug, PartialEq, Eq)]
enum Node {
    /// An exact byte string.
    Literal(Box<[u8]>),
    /// Exactly one byte from the set.
    Class(ByteSet),
    /// `set{min,}`, with the run's stop bytes precomputed.
    Run {
        set: ByteSet,
        min: usize,
        stops: Stops,
    },
    Seq(Vec<Node>),
    Alt(Vec<Node>),
    Repeat {
        inner: Box<Node>,
        min: u32,
        max: Option<u32>,
    },
}

/// Bytes that terminate a run, when few enough for `memchr`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Stops {
    One(u8),
    Two(u8, u8),
    Three(u8, u8, u8),
    Scan,
}

impl Stops {
    fn for_set(set: ByteSet) -> Self {
        let excluded = set.complement();
        let mut bytes = excluded.iter();
        match excluded.len() {
            1 => match bytes.next() {
                Some(a) => Stops::One(a),
                None => Stops::Scan,
            },
            2 => match (bytes.next(), bytes.next()) {
                (Some(a), Some(b)) => Stops::Two(a, b),
                _ => Stops::Scan,
            },
            3 => match (bytes.next(), bytes.next(), bytes.next()) {
                (Some(a), Some(b), Some(c)) => Stops::Three(a, b, c),
                _ => Stops::Scan,
            },
            _ => Stops::Scan,
        }
    }
}

/// Length of the longest prefix of `input` whose bytes are all in `set`.
fn run_len(set: ByteSet, stops: Stops, input: &[u8]) -> usize {
    let stop = match stops {
        Stops::One(a) => memchr(a, input),
        Stops::Two(a, b) => memchr2(a, b, input),
        Stops::Three(a, b, c) => memchr3(a, b, c, input),
        Stops::Scan => input.iter().position(|&b| !set.contains(b)),
    };
    stop.unwrap_or(input.len())
}

/// Insert `pos` into a sorted set, keeping it deduplicated.
fn insert(ends: &mut Ends, pos: usize) {
    if let Err(at) = ends.binary_search(&pos) {
        ends.insert(at, pos);
    }
}

/// Insert every position in `lo..=hi`.
fn insert_range(ends: &mut Ends, lo: usize, hi: usize) {
    if ends.last().map_or(true, |&last| last < lo) {
        ends.extend(lo..=hi);
    } else {
        for pos in lo..=hi {
            insert(ends, pos);
        }
    }
}

impl Node {
    /// Add every end position reachable from `start` to `out`.
    fn step(&self, input: &[u8], start: usize, out: &mut Ends) {
        match self {
            Node::Literal(bytes) => {
                if input
                    .get(start..)
                    .is_some_and(|rest| rest.starts_with(bytes))
                {
                    insert(out, start + bytes.len());
                }
            }
            Node::Class(set) => {
                if input.get(start).is_some_and(|&b| set.contains(b)) {
                    insert(out, start + 1);
                }
            }
            Node::Run { set, min, stops } => {
                let rest = input.get(start..).unwrap_or_default();
                let n = run_len(*set, *stops, rest);
                if n >= *min {
                    insert_range(out, start + min, start + n);
                }
            }
            Node::Seq(parts) => {
                let mut current: Ends = smallvec![start];
                for part in parts {
                    let mut next = Ends::new();
                    for &pos in &current {
                        part.step(input, pos, &mut next);
                    }
                    if next.is_empty() {
                        return;
                    }
                    current = next;
                }
                for pos in current {
                    insert(out, pos);
                }
            }
            Node::Alt(choices) => {
                for choice in choices {
                    choice.step(input, start, out);
                }
            }
            Node::Repeat { inner, min, max } => {
                let mut seen = Ends::new();
                if *min == 0 {
                    insert(out, start);
                    insert(&mut seen, start);
                }
                let mut frontier: Ends = smallvec![start];
                let mut count = 0u32;
                while !frontier.is_empty() && max.map_or(true, |m| count < m) {
                    let mut next = Ends::new();
                    for &pos in &frontier {
                        inner.step(input, pos, &mut next);
                    }
                    count += 1;
                    if count >= *min {
                        // Past the minimum, an unbounded repeat only needs to
                        // explore positions it has not produced before.
                        if max.is_none() {
                            next.retain(|pos| seen.binary_search(pos).is_err());
                        }
                        for &pos in &next {
                            insert(out, pos);
                            insert(&mut seen, pos);
                        }
                    }
                    frontier = next;
                }
            }
        }
    }

    fn nullable(&self) -> bool {
        match self {
            Node::Literal(bytes) => bytes.is_empty(),
            Node::Class(_) => false,
            Node::Run { min, .. } => *min == 0,
            Node::Seq(parts) => parts.iter().all(Node::nullable),
            Node::Alt(choices) => choices.iter().any(Node::nullable),
            Node::Repeat { inner, min, .. } => *min == 0 || inner.nullable(),
        }
    }

    /// Whether any input at all, empty or not, is matched.
    fn viable(&self) -> bool {
        match self {
            Node::Literal(_) => true,
            Node::Class(set) => !set.is_empty(),
            Node::Run { set, min, .. } => *min == 0 || !set.is_empty(),
            Node::Seq(parts) => parts.iter().all(Node::viable),
            Node::Alt(choices) => choices.iter().any(Node::viable),
            Node::Repeat { inner, min, .. } => *min == 0 || inner.viable(),
        }
    }

    /// Bytes that begin some non-empty match. Branches that cannot match
    /// anything contribute nothing.
    fn first_bytes(&self) -> ByteSet {
        if !self.viable() {
            return ByteSet::EMPTY;
        }
        match self {
            Node::Literal(bytes) => bytes
                .first()
                .map_or(ByteSet::EMPTY, |&b| ByteSet::EMPTY.with(b)),
            Node::Class(set) | Node::Run { set, .. } => *set,
            Node::Seq(parts) => {
                let mut first = ByteSet::EMPTY;
                for part in parts {
                    first = first.union(part.first_bytes());
                    if !part.nullable() {
                        break;
                    }
                }
                first
            }
            Node::Alt(choices) => choices
                .iter()
                .fold(ByteSet::EMPTY, |acc, c| acc.union(c.first_bytes())),
            Node::Repeat { inner, max, .. } => {
                if *max == Some(0) {
                    ByteSet::EMPTY
                } else {
                    inner.first_bytes()
                }
            }
        }
    }
}

impl Pattern {
    /// All positions where a match starting at `start` can end, ascending.
    ///
    /// Includes `start` itself if the pattern can match the empty string.
    pub fn ends(&self, input: &[u8], start: usize) -> Ends {
        let mut out = Ends::new();
        self.0.step(input, start, &mut out);
        out
    }

    /// End of the longest non-empty match at `start`, if any.
    pub fn longest(&self, input: &[u8], start: usize) -> Option<usize> {
        match &self.0 {
            Node::Literal(bytes) => input
                .get(start..)
                .is_some_and(|rest| !bytes.is_empty() && rest.starts_with(bytes))
                .then(|| start + bytes.len()),
            Node::Class(set) => input
                .get(start)
                .is_some_and(|&b| set.contains(b))
                .then_some(start + 1),
            Node::Run { set, min, stops } => {
                let rest = input.get(start..).unwrap_or_default();
                let n = run_len(*set, *stops, rest);
                (n > 0 && n >= *min).then_some(start + n)
            }
            _ => self.ends(input, start).last().copied().filter(|&end| end > start),
        }
    }

    /// Whether the pattern can match the empty string.
    pub fn nullable(&self) -> bool {
        self.0.nullable()
    }

    /// Bytes that can begin a non-empty match.
    pub fn first_bytes(&self) -> ByteSet {
        self.0.first_bytes()
    }
}

/// An exact string.
pub fn lit(text: &str) -> Pattern {
    Pattern(Node::Literal(text.as_bytes().into()))
}

/// An exact byte.
pub fn byte(b: u8) -> Pattern {
    Pattern(Node::Literal(Box::new([b])))
}

/// One byte from `set`.
pub fn class(set: ByteSet) -> Pattern {
    Pattern(Node::Class(set))
}

/// `set+`
pub fn plus(set: ByteSet) -> Pattern {
    run(set, 1)
}

/// `set*`
pub fn star(set: ByteSet) -> Pattern {
    run(set, 0)
}

/// `set{min,}`
pub fn run(set: ByteSet, min: usize) -> Pattern {
    Pattern(Node::Run {
        set,
        min,
        stops: Stops::for_set(set),
    })
}

/// Concatenation.
pub fn seq(parts: impl IntoIterator<Item = Pattern>) -> Pattern {
    let mut nodes: Vec<Node> = parts.into_iter().map(|p| p.0).collect();
    if nodes.len() == 1 {
        if let Some(only) = nodes.pop() {
            return Pattern(only);
        }
    }
    Pattern(Node::Seq(nodes))
}

/// Alternation. All alternatives are explored; none is preferred.
pub fn alt(choices: impl IntoIterator<Item = Pattern>) -> Pattern {
    Pattern(Node::Alt(choices.into_iter().map(|p| p.0).collect()))
}

/// `p?`
pub fn opt(p: Pattern) -> Pattern {
    repeat(p, 0, Some(1))
}

/// `p{min,max}`; `max: None` is unbounded.
pub fn repeat(p: Pattern, min: u32, max: Option<u32>) -> Pattern {
    Pattern(Node::Repeat {
        inner: Box::new(p.0),
        min,
        max,
    })
}
