use std::collections::{HashMap, HashSet};
use std::hash::Hash;
use std::ops::Range;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpTag {
    Equal,
    Insert,
    Delete,
    Replace,
}

/// One contiguous span of alignment between two sequences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Opcode {
    pub tag: OpTag,
    pub old: Range<usize>,
    pub new: Range<usize>,
}

impl Opcode {
    #[must_use]
    pub const fn new(tag: OpTag, old: Range<usize>, new: Range<usize>) -> Self {
        Self { tag, old, new }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Edit {
    Equal,
    Delete,
    Insert,
}

/// Align `old` and `new` and group the shortest edit script into opcodes.
///
/// Adjacent deletions and insertions between two equal runs merge into a
/// single `Replace` span.
#[must_use]
pub fn opcodes<T: Eq + Hash>(old: &[T], new: &[T]) -> Vec<Opcode> {
    group(&edit_script(old, new))
}

fn edit_script<T: Eq + Hash>(old: &[T], new: &[T]) -> Vec<Edit> {
    let mut edits = Vec::with_capacity(old.len() + new.len());
    let (mut i, mut j) = (0, 0);
    for (x, y) in common_subsequence(old, new) {
        edits.extend(std::iter::repeat_n(Edit::Delete, x - i));
        edits.extend(std::iter::repeat_n(Edit::Insert, y - j));
        edits.push(Edit::Equal);
        i = x + 1;
        j = y + 1;
    }
    edits.extend(std::iter::repeat_n(Edit::Delete, old.len() - i));
    edits.extend(std::iter::repeat_n(Edit::Insert, new.len() - j));
    edits
}

/// Lines present on both sides, as dense ids plus their original positions.
///
/// A line that never occurs on the other side cannot be part of a common
/// subsequence, so it is left out of the search entirely.
#[derive(Debug, Default)]
struct Projection {
    ids: Vec<usize>,
    positions: Vec<usize>,
}

fn project<T: Eq + Hash>(old: &[T], new: &[T]) -> (Projection, Projection) {
    let mut ids: HashMap<&T, usize> = HashMap::new();
    for line in new {
        let next = ids.len();
        ids.entry(line).or_insert(next);
    }

    let mut old_side = Projection::default();
    let mut shared = HashSet::new();
    for (pos, line) in old.iter().enumerate() {
        if let Some(&id) = ids.get(line) {
            old_side.ids.push(id);
            old_side.positions.push(pos);
            shared.insert(id);
        }
    }

    let mut new_side = Projection::default();
    for (pos, line) in new.iter().enumerate() {
        let id = ids[line];
        if shared.contains(&id) {
            new_side.ids.push(id);
            new_side.positions.push(pos);
        }
    }

    (old_side, new_side)
}

/// Matched `(old, new)` index pairs of a longest common subsequence, ascending.
fn common_subsequence<T: Eq + Hash>(old: &[T], new: &[T]) -> Vec<(usize, usize)> {
    let (a, b) = project(old, new);
    let max_d = (a.ids.len() + b.ids.len()).div_ceil(2) + 1;
    let mut forward = Frontier::new(max_d);
    let mut backward = Frontier::new(max_d);

    let mut matches = Vec::new();
    conquer(&a.ids, &b.ids, (0, 0), &mut forward, &mut backward, &mut matches);
    matches
        .into_iter()
        .map(|(x, y)| (a.positions[x], b.positions[y]))
        .collect()
}

/// Furthest-reaching `x` per diagonal `k`, indexable by negative diagonals.
struct Frontier {
    offset: isize,
    v: Vec<usize>,
}

#[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
impl Frontier {
    fn new(max_d: usize) -> Self {
        Self {
            offset: max_d as isize + 1,
            v: vec![0; 2 * max_d + 3],
        }
    }

    fn get(&self, k: isize) -> usize {
        self.v[(k + self.offset) as usize]
    }

    fn set(&mut self, k: isize, x: usize) {
        self.v[(k + self.offset) as usize] = x;
    }

    fn next_x(&self, k: isize, d: isize) -> usize {
        if k == -d || (k != d && self.get(k - 1) < self.get(k + 1)) {
            self.get(k + 1)
        } else {
            self.get(k - 1) + 1
        }
    }
}

/// Divide-and-conquer Myers: split at the middle snake, recurse on both halves.
///
/// Space stays linear in the input; recursion depth is logarithmic in the
/// edit distance.
fn conquer(
    a: &[usize],
    b: &[usize],
    (a_off, b_off): (usize, usize),
    forward: &mut Frontier,
    backward: &mut Frontier,
    out: &mut Vec<(usize, usize)>,
) {
    let prefix = a.iter().zip(b).take_while(|(x, y)| x == y).count();
    out.extend((0..prefix).map(|i| (a_off + i, b_off + i)));
    let (a, b) = (&a[prefix..], &b[prefix..]);
    let (a_off, b_off) = (a_off + prefix, b_off + prefix);

    let suffix = a
        .iter()
        .rev()
        .zip(b.iter().rev())
        .take_while(|(x, y)| x == y)
        .count();
    let (a, b) = (&a[..a.len() - suffix], &b[..b.len() - suffix]);

    if !a.is_empty() && !b.is_empty() {
        let (n, m) = (a.len(), b.len());
        match middle_snake(a, b, forward, backward) {
            Some((x, y)) if x <= n && y <= m && (x, y) != (0, 0) && (x, y) != (n, m) => {
                conquer(&a[..x], &b[..y], (a_off, b_off), forward, backward, out);
                conquer(&a[x..], &b[y..], (a_off + x, b_off + y), forward, backward, out);
            }
            _ => {}
        }
    }

    out.extend((0..suffix).map(|i| (a_off + a.len() + i, b_off + b.len() + i)));
}

/// Start of the middle snake of an optimal path through `a` x `b`.
///
/// Both inputs are non-empty and share no common prefix or suffix.
#[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
fn middle_snake(
    a: &[usize],
    b: &[usize],
    forward: &mut Frontier,
    backward: &mut Frontier,
) -> Option<(usize, usize)> {
    let (n, m) = (a.len(), b.len());
    let delta = n as isize - m as isize;
    let odd = delta & 1 == 1;
    let max_d = (n + m).div_ceil(2) as isize + 1;

    forward.set(1, 0);
    backward.set(1, 0);

    for d in 0..max_d {
        for k in (-d..=d).step_by(2) {
            let mut x = forward.next_x(k, d);
            let mut y = (x as isize - k) as usize;
            let start = (x, y);
            while x < n && y < m && a[x] == b[y] {
                x += 1;
                y += 1;
            }
            forward.set(k, x);
            if odd && (k - delta).abs() < d && x + backward.get(delta - k) >= n {
                return Some(start);
            }
        }

        for k in (-d..=d).step_by(2) {
            let mut x = backward.next_x(k, d);
            let mut y = (x as isize - k) as usize;
            while x < n && y < m && a[n - x - 1] == b[m - y - 1] {
                x += 1;
                y += 1;
            }
            backward.set(k, x);
            if !odd && (k - delta).abs() <= d && x + forward.get(delta - k) >= n {
                return Some((n.saturating_sub(x), m.saturating_sub(y)));
            }
        }
    }

    None
}

fn group(edits: &[Edit]) -> Vec<Opcode> {
    let mut codes = Vec::new();
    let (mut i, mut j) = (0, 0);
    let mut pos = 0;

    while pos < edits.len() {
        if edits[pos] == Edit::Equal {
            let run = edits[pos..]
                .iter()
                .take_while(|e| **e == Edit::Equal)
                .count();
            codes.push(Opcode::new(OpTag::Equal, i..i + run, j..j + run));
            i += run;
            j += run;
            pos += run;
            continue;
        }

        let run = &edits[pos..];
        let len = run.iter().take_while(|e| **e != Edit::Equal).count();
        let deleted = run[..len].iter().filter(|e| **e == Edit::Delete).count();
        let inserted = len - deleted;
        let tag = match (deleted, inserted) {
            (0, _) => OpTag::Insert,
            (_, 0) => OpTag::Delete,
            _ => OpTag::Replace,
        };
        codes.push(Opcode::new(tag, i..i + deleted, j..j + inserted));
        i += deleted;
        j += inserted;
        pos += len;
    }

    codes
}

#[cfg(test)]
#[path = "opcode_tests.rs"]
mod tests;
