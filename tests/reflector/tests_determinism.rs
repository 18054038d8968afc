use naked::{ReflectMode, Reflector};

use crate::helpers::domain_fixtures::DEMO_REGISTRY;
use crate::helpers::reflect_helpers::{demo_config, reflect_demo};

#[test]
fn test_parallel_matches_sequential() {
    let sequential = reflect_demo(ReflectMode::Sequential);
    let parallel = reflect_demo(ReflectMode::Parallel);

    assert_eq!(
        sequential.metamodel.all_specifications(),
        parallel.metamodel.all_specifications()
    );
    assert_eq!(sequential.diagnostics, parallel.diagnostics);
}

#[test]
fn test_single_worker_matches_many() {
    let single = Reflector::with_default_factories(
        DEMO_REGISTRY.clone(),
        demo_config(ReflectMode::Parallel).with_max_threads(1),
    )
    .reflect()
    .unwrap();
    let many = reflect_demo(ReflectMode::Parallel);

    assert_eq!(single.metamodel.all_specifications(), many.metamodel.all_specifications());
}

#[test]
fn test_repeated_runs_are_stable() {
    let first = reflect_demo(ReflectMode::Parallel);
    for _ in 0..3 {
        let again = reflect_demo(ReflectMode::Parallel);
        assert_eq!(first.metamodel.all_specifications(), again.metamodel.all_specifications());
        assert_eq!(first.diagnostics, again.diagnostics);
    }
}
