use outcome_rail::prelude::*;

#[derive(Debug, PartialEq)]
enum SignupError {
    MissingField(&'static str),
    InvalidAge(String),
    TooYoung(u8),
}

impl std::fmt::Display for SignupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField(name) => write!(f, "missing field `{name}`"),
            Self::InvalidAge(raw) => write!(f, "`{raw}` is not an age"),
            Self::TooYoung(age) => write!(f, "must be 18 or older, got {age}"),
        }
    }
}

fn field(
    form: &[(&'static str, &'static str)],
    name: &'static str,
) -> Outcome<&'static str, SignupError> {
    from_optional(
        form.iter().find(|(key, _)| *key == name).map(|(_, value)| *value),
        || SignupError::MissingField(name),
    )
}

fn age(raw: &str) -> Outcome<u8, SignupError> {
    attempt(|| raw.parse::<u8>())
        .map_error(|_| SignupError::InvalidAge(raw.to_string()))
        .flat_map(|age| {
            if age >= 18 {
                Outcome::ok(age)
            } else {
                Outcome::err(SignupError::TooYoung(age))
            }
        })
}

fn signup(form: &[(&'static str, &'static str)]) -> Outcome<String, SignupError> {
    field(form, "name")
        .both(|| field(form, "age").flat_map(age))
        .map(|(name, age)| format!("{name} ({age})"))
}

fn main() {
    let forms: [&[(&str, &str)]; 4] = [
        &[("name", "ada"), ("age", "36")],
        &[("age", "36")],
        &[("name", "bob"), ("age", "twelve")],
        &[("name", "cy"), ("age", "12")],
    ];

    for form in forms {
        let message = signup(form).analyze(
            |user| format!("registered {user}"),
            |err| format!("rejected: {err}"),
        );
        println!("{message}");
    }
}
