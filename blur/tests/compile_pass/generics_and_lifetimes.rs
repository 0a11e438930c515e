//! Test: generic and lifetime parameters get only the bounds they need.

use std::{borrow::Cow, marker::PhantomData};

use blur::{Blur, Strings};

struct NotBlurrable;

#[derive(Blur)]
struct Record<'a, T, U, V> {
    #[blur(Strings)]
    label: Cow<'a, str>,
    #[blur(Strings)]
    masked: T,
    #[blur]
    nested: Option<U>,
    plain: V,
    _marker: PhantomData<NotBlurrable>,
}

#[derive(Blur)]
enum Either<L, R> {
    Left(#[blur] L),
    Right {
        #[blur(Strings)]
        value: R,
    },
}

fn main() {
    let record = Record {
        label: Cow::Borrowed("abc"),
        masked: vec!["de".to_string()],
        nested: Some(Either::<Vec<String>, String>::Right {
            value: "fg".to_string(),
        }),
        plain: NotBlurrable,
        _marker: PhantomData,
    }
    .blur()
    .unwrap();
    assert_eq!(record.label, "***");
    assert_eq!(record.masked, ["**"]);
    assert!(matches!(record.nested, Some(Either::Right { ref value }) if value == "**"));
}
