//! Model-based property tests for the lock registry.
//!
//! Random operation sequences run against both [`LockRegistry`] and a plain
//! ordered `Vec` model; every outcome and the full status listing must agree
//! after each step.

use proptest::prelude::*;

use envlock_core::{
    handle, AcquireOutcome, EnvName, EnvironmentLocks, Holder, LockRegistry, ReleaseOutcome,
};

const NAMES: [&str; 4] = ["envA", "envB", "staging", "qa"];
const HOLDERS: [&str; 3] = ["alice", "bob", ""];

#[derive(Debug, Clone)]
enum Op {
    Acquire(usize, usize),
    Release(usize, usize),
    Status(usize),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0..NAMES.len(), 0..HOLDERS.len()).prop_map(|(n, h)| Op::Acquire(n, h)),
        (0..NAMES.len(), 0..HOLDERS.len()).prop_map(|(n, h)| Op::Release(n, h)),
        (0..NAMES.len()).prop_map(Op::Status),
    ]
}

fn listing(registry: &LockRegistry) -> Vec<(String, String)> {
    registry
        .status_all()
        .into_iter()
        .map(|e| (e.name.0, e.holder.0))
        .collect()
}

proptest! {
    #[test]
    fn registry_matches_reference_model(ops in prop::collection::vec(op_strategy(), 0..64)) {
        let registry = LockRegistry::new();
        let mut model: Vec<(String, String)> = Vec::new();

        for op in ops {
            match op {
                Op::Acquire(n, h) => {
                    let (name, holder) = (NAMES[n], HOLDERS[h]);
                    let outcome = registry.acquire(&EnvName::from(name), &Holder::from(holder));
                    match model.iter().position(|(k, _)| k == name) {
                        Some(i) => prop_assert_eq!(
                            outcome,
                            AcquireOutcome::AlreadyLocked { holder: Holder::from(model[i].1.as_str()) }
                        ),
                        None => {
                            prop_assert_eq!(outcome, AcquireOutcome::Acquired);
                            model.push((name.to_string(), holder.to_string()));
                        }
                    }
                }
                Op::Release(n, h) => {
                    let (name, holder) = (NAMES[n], HOLDERS[h]);
                    let outcome = registry.release(&EnvName::from(name), &Holder::from(holder));
                    match model.iter().position(|(k, _)| k == name) {
                        None => prop_assert_eq!(outcome, ReleaseOutcome::AlreadyFree),
                        Some(i) if model[i].1 == holder => {
                            prop_assert_eq!(outcome, ReleaseOutcome::Released);
                            model.remove(i);
                        }
                        Some(i) => prop_assert_eq!(
                            outcome,
                            ReleaseOutcome::Forbidden { holder: Holder::from(model[i].1.as_str()) }
                        ),
                    }
                }
                Op::Status(n) => {
                    let name = NAMES[n];
                    let expected = model
                        .iter()
                        .find(|(k, _)| k == name)
                        .map(|(_, v)| Holder::from(v.as_str()));
                    prop_assert_eq!(registry.status(&EnvName::from(name)), expected);
                }
            }

            prop_assert_eq!(listing(&registry), model.clone());
        }
    }

    #[test]
    fn lock_then_unlock_restores_prior_table(
        setup in prop::collection::vec(op_strategy(), 0..32),
        n in 0..NAMES.len(),
        h in 0..HOLDERS.len(),
    ) {
        let registry = LockRegistry::new();
        for op in setup {
            match op {
                Op::Acquire(n, h) => { registry.acquire(&EnvName::from(NAMES[n]), &Holder::from(HOLDERS[h])); }
                Op::Release(n, h) => { registry.release(&EnvName::from(NAMES[n]), &Holder::from(HOLDERS[h])); }
                Op::Status(_) => {}
            }
        }

        let name = EnvName::from(NAMES[n]);
        let holder = Holder::from(HOLDERS[h]);
        prop_assume!(registry.status(&name).is_none());

        let before = listing(&registry);
        prop_assert_eq!(registry.acquire(&name, &holder), AcquireOutcome::Acquired);
        prop_assert_eq!(registry.release(&name, &holder), ReleaseOutcome::Released);
        prop_assert_eq!(listing(&registry), before);
    }

    #[test]
    fn interpreter_never_mutates_on_unrecognized_text(text in "\\PC{0,40}") {
        let registry = LockRegistry::new();
        registry.acquire(&EnvName::from("envA"), &Holder::from("alice"));

        let words: Vec<&str> = text.split_whitespace().collect();
        let recognized = matches!(
            words.as_slice(),
            ["lock", _] | ["unlock", _] | ["status", _] | ["status"]
        );
        prop_assume!(!recognized);

        prop_assert_eq!(handle(&registry, &text, "bob"), envlock_core::HELP_TEXT);
        prop_assert_eq!(
            listing(&registry),
            vec![("envA".to_string(), "alice".to_string())]
        );
    }
}
