// Fail-fast is process-wide, so this lives in its own test binary.

use ai_core::{diagnostics, Blackboard};

#[test]
#[should_panic(expected = "blackboard type mismatch for key `ammo`")]
fn type_mismatch_panics_when_fail_fast_is_enabled() {
    let mut bb = Blackboard::new();
    bb.set("ammo", 1u32);

    assert!(bb.get::<i32>("ammo").is_err());

    diagnostics::set_fail_fast(true);
    let _ = bb.get::<i32>("ammo");
}
