use outcome_rail::bridge::{try_with_slot, try_with_slot_flag};
use outcome_rail::prelude::*;

/// Mimics a C-style API: returns `None` on failure and sometimes reports why.
fn legacy_read(path: &str, error: &mut Option<LocatedError>) -> Option<Vec<u8>> {
    match path {
        "/etc/hostname" => Some(b"rail-01".to_vec()),
        "/root/secret" => {
            *error = Some(located!("permission denied: {}", path));
            None
        }
        _ => None,
    }
}

fn legacy_remove(path: &str, _error: &mut Option<LocatedError>) -> bool {
    path.starts_with("/tmp/")
}

fn main() {
    for path in ["/etc/hostname", "/root/secret", "/missing"] {
        let contents = try_with_slot(|slot| legacy_read(path, slot))
            .map(|bytes| String::from_utf8_lossy(&bytes).into_owned());
        println!("read {path}: {contents}");
    }

    let removed = try_with_slot_flag(|slot| legacy_remove("/var/log/app.log", slot));
    println!("remove: {removed:?}");
}
