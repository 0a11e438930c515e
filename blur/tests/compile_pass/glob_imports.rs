//! Test: generated code uses absolute paths, so glob imports and local items
//! named like std types do not interfere.

#![allow(dead_code)]

use blur::*;

type Result<T> = std::result::Result<T, String>;

struct Option;

#[derive(Blur)]
struct Login {
    #[blur(Email)]
    email: String,
    #[blur(Password)]
    password: String,
}

fn check() -> Result<()> {
    let login = Login {
        email: "bob@example.com".into(),
        password: "hunter2".into(),
    }
    .blur()
    .map_err(|err| err.to_string())?;
    assert_eq!(login.email, "b**@example.com");
    assert_eq!(login.password, "*******");
    Ok(())
}

fn main() {
    check().unwrap();
}
