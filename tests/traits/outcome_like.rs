use outcome_rail::{both, materialize, Outcome, OutcomeLike};
use std::cell::Cell;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FetchError {
    Timeout,
    NotFound,
}

fn success() -> Outcome<String, FetchError> {
    Outcome::ok("success".to_string())
}

fn failure() -> Outcome<String, FetchError> {
    Outcome::err(FetchError::Timeout)
}

fn failure2() -> Outcome<String, FetchError> {
    Outcome::err(FetchError::NotFound)
}

#[test]
fn map_transforms_successes() {
    assert_eq!(success().map(|s| s.len()).recover(|| 0), 7);
}

#[test]
fn map_rewraps_failures() {
    assert_eq!(failure().map(|s| s.len()).recover(|| 0), 0);
    assert_eq!(failure().map(|s| s.len()), Outcome::err(FetchError::Timeout));
}

#[test]
fn analyze_invokes_exactly_one_branch() {
    let ok_calls = Cell::new(0);
    let err_calls = Cell::new(0);

    let label = success().analyze(
        |_| {
            ok_calls.set(ok_calls.get() + 1);
            "ok"
        },
        |_| {
            err_calls.set(err_calls.get() + 1);
            "err"
        },
    );
    assert_eq!(label, "ok");
    assert_eq!((ok_calls.get(), err_calls.get()), (1, 0));

    let label = failure().analyze(|_| "ok", |_| "err");
    assert_eq!(label, "err");
}

#[test]
fn flat_map_chains_dependent_steps() {
    let parsed = Outcome::<&str, String>::ok("21")
        .flat_map(|raw| materialize(raw.parse::<i32>().map_err(|e| e.to_string())))
        .chain(|n| if n > 0 { Outcome::ok(n * 2) } else { Outcome::err("negative".to_string()) });
    assert_eq!(parsed, Outcome::ok(42));
}

#[test]
fn map_error_transforms_failures_only() {
    let mapped = failure().map_error(|e| format!("{e:?}"));
    assert_eq!(mapped, Outcome::err("Timeout".to_string()));

    let untouched = success().map_error(|e| format!("{e:?}"));
    assert_eq!(untouched, Outcome::ok("success".to_string()));
}

#[test]
fn flat_map_error_can_recover_or_replace() {
    let recovered: Outcome<String, ()> = failure().flat_map_error(|e| match e {
        FetchError::Timeout => Outcome::ok("cached".to_string()),
        FetchError::NotFound => Outcome::err(()),
    });
    assert_eq!(recovered, Outcome::ok("cached".to_string()));

    let replaced: Outcome<String, &str> = failure2().flat_map_error(|_| Outcome::err("gone"));
    assert_eq!(replaced, Outcome::err("gone"));
}

#[test]
fn recover_produces_left_for_left_success() {
    assert_eq!(success().recover(|| "right".to_string()), "success");
}

#[test]
fn recover_produces_right_for_left_failure() {
    assert_eq!(failure().recover(|| "right".to_string()), "right");
    assert_eq!(failure().or_value(|| "right".to_string()), "right");
}

#[test]
fn recover_does_not_evaluate_fallback_on_success() {
    let evaluated = Cell::new(false);
    let value = success().recover(|| {
        evaluated.set(true);
        "right".to_string()
    });
    assert_eq!(value, "success");
    assert!(!evaluated.get());
}

#[test]
fn recover_with_produces_left_for_left_success() {
    let evaluated = Cell::new(false);
    let picked = success().recover_with(|| {
        evaluated.set(true);
        Outcome::ok("right".to_string())
    });
    assert_eq!(picked.value().as_deref(), Some("success"));
    assert!(!evaluated.get());
}

#[test]
fn recover_with_produces_right_success_for_left_failure_and_right_success() {
    let picked = failure().recover_with(|| Outcome::ok("right".to_string()));
    assert_eq!(picked.value().as_deref(), Some("right"));
}

#[test]
fn recover_with_produces_right_failure_for_left_failure_and_right_failure() {
    let picked = failure().recover_with(failure2);
    assert_eq!(picked.error_value(), Some(FetchError::NotFound));
}

#[test]
fn conjunction_pairs_two_successes() {
    let pair = success().both(success);
    assert_eq!(pair, Outcome::ok(("success".to_string(), "success".to_string())));
}

#[test]
fn conjunction_prefers_the_left_failure() {
    assert_eq!(failure().both(failure2).error_value(), Some(FetchError::Timeout));
    assert_eq!(failure().both(success).error_value(), Some(FetchError::Timeout));
    assert_eq!(success().both(failure2).error_value(), Some(FetchError::NotFound));
}

#[test]
fn conjunction_never_evaluates_right_after_left_failure() {
    let evaluated = Cell::new(false);
    let paired = failure().both(|| {
        evaluated.set(true);
        success()
    });
    assert_eq!(paired.error_value(), Some(FetchError::Timeout));
    assert!(!evaluated.get());
}

#[test]
fn conjunction_end_to_end_sum() {
    let o1 = Outcome::<i32, FetchError>::ok(3);
    let o2 = Outcome::<i32, FetchError>::ok(4);
    assert_eq!(o1.both(|| o2), Outcome::ok((3, 4)));
    assert_eq!(both(o1, || o2).map(|(a, b)| a + b), Outcome::ok(7));
}

#[test]
fn conjunction_end_to_end_failures() {
    let left = both(Outcome::<i32, FetchError>::err(FetchError::Timeout), || {
        Outcome::<i32, FetchError>::ok(4)
    });
    assert_eq!(left, Outcome::err(FetchError::Timeout));

    let right = both(Outcome::<i32, FetchError>::ok(3), || {
        Outcome::<i32, FetchError>::err(FetchError::NotFound)
    });
    assert_eq!(right, Outcome::err(FetchError::NotFound));
}

#[test]
fn conjunction_accepts_mixed_outcome_implementors() {
    let mixed = success().both(|| Ok::<u8, FetchError>(1));
    assert_eq!(mixed, Outcome::ok(("success".to_string(), 1)));
}

#[test]
fn algebra_applies_to_std_result() {
    let ok: Result<i32, &str> = Ok(2);
    assert_eq!(OutcomeLike::map(ok, |x| x + 1), Outcome::ok(3));
    assert_eq!(ok.value(), Some(2));
    assert_eq!(ok.error_value(), None);

    let err: Result<i32, &str> = Err("bad");
    assert_eq!(err.recover(|| 0), 0);
    assert_eq!(err.recover_with(|| Ok(5)), Ok(5));
    assert_eq!(OutcomeLike::map_error(err, str::len), Outcome::err(3));
    assert_eq!(<Result<i32, &str>>::from_error("x"), Err("x"));
}
