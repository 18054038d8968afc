use std::cmp::Ordering;

use naked::base::{Identifier, TypeName};
use naked::meta::{
    AssociationKind, AssociationSpecBuilder, Facet, MemberOrderComparator, Specification,
    SpecificationBuilder,
};
use rstest::rstest;

fn member(name: &str, sequence: Option<&str>) -> AssociationSpecBuilder {
    let mut builder = AssociationSpecBuilder::new(
        Identifier::for_field("Demo.Customer", name),
        AssociationKind::OneToOne,
        TypeName::from("System.String"),
    );
    if let Some(sequence) = sequence {
        builder
            .add_facet(Facet::MemberOrder {
                name: None,
                sequence: sequence.into(),
            })
            .unwrap();
    }
    builder
}

fn sample() -> Vec<AssociationSpecBuilder> {
    vec![
        member("Alpha", Some("2")),
        member("Beta", Some("10")),
        member("Gamma", Some("1.5")),
        member("Delta", Some("1")),
        member("Epsilon", Some("b")),
        member("Zeta", Some("1a")),
        member("Eta", None),
        member("Theta", None),
        member("Iota", Some(" 2 ")),
    ]
}

#[test]
fn test_comparator_is_antisymmetric_and_reflexive() {
    let comparator = MemberOrderComparator;
    let members = sample();
    for a in &members {
        assert_eq!(comparator.compare(a, a), Ordering::Equal);
        for b in &members {
            assert_eq!(comparator.compare(a, b), comparator.compare(b, a).reverse());
        }
    }
}

#[test]
fn test_comparator_is_transitive() {
    let comparator = MemberOrderComparator;
    let members = sample();
    for a in &members {
        for b in &members {
            for c in &members {
                if comparator.compare(a, b) == Ordering::Less && comparator.compare(b, c) == Ordering::Less {
                    assert_eq!(comparator.compare(a, c), Ordering::Less);
                }
            }
        }
    }
}

#[test]
fn test_sort_places_unsequenced_members_last() {
    let mut members = sample();
    MemberOrderComparator.sort(&mut members);
    let names: Vec<_> = members
        .iter()
        .filter_map(|m| m.identifier().member_name())
        .collect();
    assert_eq!(
        names,
        vec!["Delta", "Gamma", "Alpha", "Iota", "Beta", "Zeta", "Epsilon", "Eta", "Theta"]
    );
}

#[rstest]
#[case(Some("1"), Some("1"), "Alpha")]
#[case(None, None, "Alpha")]
#[case(None, Some("3"), "Beta")]
#[case(Some("1.1"), Some("1"), "Beta")]
fn test_pairwise_order(#[case] alpha: Option<&str>, #[case] beta: Option<&str>, #[case] first: &str) {
    let mut members = vec![member("Beta", beta), member("Alpha", alpha)];
    MemberOrderComparator.sort(&mut members);
    assert_eq!(members[0].identifier().member_name(), Some(first));
}
