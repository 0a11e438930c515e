//! Test: a user-defined category works like a built-in one.

use blur::{Blur, Category, DefaultDirective, Directive};

#[derive(Clone, Copy)]
struct LicensePlate;

impl Category for LicensePlate {
    const NAME: &'static str = "LicensePlate";
}

impl DefaultDirective for LicensePlate {
    fn directive() -> Directive {
        Directive::new(Self::NAME).with_start_offset(2).with_placeholder('#')
    }
}

fn is_long(value: &str) -> bool {
    value.len() > 2
}

#[derive(Blur)]
struct Vehicle {
    #[blur(LicensePlate)]
    plate: String,
    #[blur(LicensePlate, condition = is_long, end_offset = 1)]
    trailer: Option<String>,
    wheels: u8,
}

fn main() {
    let vehicle = Vehicle {
        plate: "AB1234".into(),
        trailer: Some("XY".into()),
        wheels: 4,
    }
    .blur()
    .unwrap();
    assert_eq!(vehicle.plate, "AB####");
    assert_eq!(vehicle.trailer.as_deref(), Some("XY"));
    assert_eq!(vehicle.wheels, 4);
}
