use outcome_rail::{function_path, located, LocatedError};

#[test]
fn errors_include_the_source_file() {
    let err = located!();
    assert_eq!(err.file(), file!());
}

#[test]
fn errors_include_the_source_line() {
    let (line, err) = (line!(), located!());
    assert_eq!(err.line(), line);
}

#[test]
fn errors_include_the_calling_function() {
    let err = located!();
    assert!(
        err.function().ends_with("errors_include_the_calling_function"),
        "unexpected function path: {}",
        err.function()
    );
}

#[test]
fn closures_report_their_enclosing_function() {
    let make = || located!("inside closure");
    let err = make();
    assert!(err.function().ends_with("closures_report_their_enclosing_function"));
    assert_eq!(err.message(), Some("inside closure"));
}

#[test]
fn function_path_names_the_enclosing_function() {
    fn helper() -> &'static str {
        function_path!()
    }
    assert!(helper().ends_with("helper"));
}

#[test]
fn formatted_message_is_recorded() {
    let err = located!("retry {} of {}", 2, 3);
    assert_eq!(err.message(), Some("retry 2 of 3"));
}

#[test]
fn here_uses_the_caller_location_without_function() {
    let line = line!() + 1;
    let err = LocatedError::here();
    assert_eq!(err.file(), file!());
    assert_eq!(err.line(), line);
    assert_eq!(err.function(), "<unknown>");
    assert_eq!(err.message(), None);
}

#[test]
fn display_includes_message_and_location() {
    let err = LocatedError::new("src/db.rs", 12)
        .with_function("app::db::connect")
        .with_message("connection refused");
    assert_eq!(err.to_string(), "connection refused (in app::db::connect at src/db.rs:12)");

    let bare = LocatedError::new("src/db.rs", 40);
    assert_eq!(bare.to_string(), "operation failed (in <unknown> at src/db.rs:40)");
}

#[test]
fn implements_std_error() {
    fn as_dyn(err: LocatedError) -> Box<dyn std::error::Error> {
        Box::new(err)
    }

    let boxed = as_dyn(LocatedError::new("lib.rs", 1).with_message("boom"));
    assert!(boxed.source().is_none());
    assert!(boxed.to_string().starts_with("boom"));
}

#[test]
#[cfg(feature = "serde")]
fn serde_round_trip_keeps_location() {
    let err = located!("persisted");
    let json = serde_json::to_string(&err).unwrap();
    let back: LocatedError = serde_json::from_str(&json).unwrap();
    assert_eq!(back, err);
}
