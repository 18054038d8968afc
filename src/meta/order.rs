//! Deterministic member ordering by `MemberOrder` sequence.
//!
//! Sequences are dotted strings such as `"1"`, `"1.2"` or `"3.a"`. They are
//! compared component by component. Numeric components sort before textual
//! ones, numerically among themselves; textual components compare
//! ordinally. A sequence that is a strict prefix of another sorts first.
//! Members without a sequence sort after members with one, and anything the
//! sequences cannot separate falls back to the members' identifiers, so the
//! order is total.

use std::cmp::Ordering;

use super::spec::Specification;

/// Total order over members (or parameters) of one type.
#[derive(Clone, Copy, Debug, Default)]
pub struct MemberOrderComparator;

impl MemberOrderComparator {
    pub fn compare<S: Specification + ?Sized>(&self, a: &S, b: &S) -> Ordering {
        let by_sequence = match (a.member_order(), b.member_order()) {
            (Some(s1), Some(s2)) => compare_sequences(s1, s2),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        };
        by_sequence.then_with(|| a.identifier().cmp(b.identifier()))
    }

    /// Stable sort of `members` into member order.
    pub fn sort<S: Specification>(&self, members: &mut [S]) {
        members.sort_by(|a, b| self.compare(a, b));
    }
}

/// Compare two dotted sequences. `Equal` means the sequences do not decide.
pub fn compare_sequences(s1: &str, s2: &str) -> Ordering {
    let mut left = s1.split('.');
    let mut right = s2.split('.');
    loop {
        match (left.next(), right.next()) {
            (Some(c1), Some(c2)) => match compare_components(c1, c2) {
                Ordering::Equal => continue,
                decided => return decided,
            },
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (None, None) => return Ordering::Equal,
        }
    }
}

fn compare_components(c1: &str, c2: &str) -> Ordering {
    match (parse_component(c1), parse_component(c2)) {
        (Some(n1), Some(n2)) => n1.cmp(&n2),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => c1.cmp(c2),
    }
}

fn parse_component(component: &str) -> Option<i64> {
    component.trim().parse().ok()
}
