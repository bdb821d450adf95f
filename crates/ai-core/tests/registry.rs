use std::sync::Arc;
use std::thread;

use ai_core::{lock_blackboard, shared_blackboard, BlackboardRegistry};

#[test]
fn registry_creates_lazily_and_returns_same_instance() {
    let registry = BlackboardRegistry::new();
    assert!(registry.is_empty());

    let a = registry.get_or_create("squad");
    let b = registry.get_or_create("squad");
    assert!(Arc::ptr_eq(&a, &b));
    assert!(registry.contains("squad"));
    assert_eq!(registry.len(), 1);

    lock_blackboard(&a).set("alert", true);
    assert_eq!(lock_blackboard(&b).get::<bool>("alert"), Ok(true));

    let other = registry.get_or_create("other");
    assert!(!Arc::ptr_eq(&a, &other));
    assert_eq!(lock_blackboard(&other).get::<bool>("alert"), Ok(false));
}

#[test]
fn global_registry_shares_by_name() {
    let a = shared_blackboard("registry-test/global");
    lock_blackboard(&a).set("seen", 7u32);

    let b = BlackboardRegistry::global().get_or_create("registry-test/global");
    assert!(Arc::ptr_eq(&a, &b));
    assert_eq!(lock_blackboard(&b).get::<u32>("seen"), Ok(7));
}

#[test]
fn shared_blackboard_tolerates_agents_on_separate_threads() {
    let registry = Arc::new(BlackboardRegistry::new());
    let threads = 8;
    let writes_per_thread = 250;

    let handles = (0..threads)
        .map(|_| {
            let registry = registry.clone();
            thread::spawn(move || {
                let board = registry.get_or_create("crowd");
                for _ in 0..writes_per_thread {
                    let mut bb = lock_blackboard(&board);
                    let seen = bb.get::<u64>("visits").expect("visits is u64");
                    bb.set("visits", seen + 1);
                }
            })
        })
        .collect::<Vec<_>>();

    for handle in handles {
        handle.join().expect("worker thread panicked");
    }

    assert_eq!(registry.len(), 1);
    let board = registry.get_or_create("crowd");
    assert_eq!(
        lock_blackboard(&board).get::<u64>("visits"),
        Ok((threads * writes_per_thread) as u64)
    );
}
