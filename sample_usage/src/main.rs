// SPDX-License-Identifier: Apache-2.0

use binfn::aabb::Aabb;
use binfn::registry::{self, AND, ONLY_FIRST};

mod multithread;

/// Combines two boxes with a combiner written as an ad hoc closure and checks
/// that it lands on the shared `AND` instance.
fn validate_overlap() -> Result<(), Box<dyn std::error::Error>> {
    let both = registry::canonicalize(&|in_a: bool, in_b: bool| !(!in_a || !in_b));
    log::info!("ad hoc combiner canonicalized to {}", both);
    assert!(std::ptr::eq(both, AND));

    let a = Aabb::new([0.0, 0.0, 0.0], [1.0, 1.0, 1.0]);
    let b = a.offset(0.5, 0.0, 0.0);
    assert!(a.compare(&b, both)?);
    assert!(a.compare(&b, ONLY_FIRST)?);
    assert!(!a.compare(&a, ONLY_FIRST)?);
    Ok(())
}

fn main() {
    let _ = env_logger::try_init();
    let result = validate_overlap();
    println!("overlap validation result: {:?}", result);
    multithread::validate_all_threads_share_instances();
    println!("all {} threads observed the same instances", num_cpus::get());
}

#[test]
fn test_validate_overlap() {
    let _ = env_logger::try_init();
    validate_overlap().expect("validation should succeed");
}
