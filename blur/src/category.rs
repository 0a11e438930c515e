//! Marker types for "what kind of sensitive data is this?"
//!
//! Each marker is zero-sized and carries its default directive at the type
//! level, so `#[blur(PhoneNumber)]` needs no runtime data to resolve.

use crate::masking::Directive;

/// Marker trait for sensitive-data categories.
///
/// Implement this for zero-sized marker types (unit structs):
///
/// ```rust
/// use blur::{Category, DefaultDirective, Directive};
///
/// #[derive(Clone, Copy)]
/// struct LicensePlate;
///
/// impl Category for LicensePlate {
///     const NAME: &'static str = "LicensePlate";
/// }
///
/// impl DefaultDirective for LicensePlate {
///     fn directive() -> Directive {
///         Directive::new(Self::NAME).with_start_offset(2)
///     }
/// }
/// ```
pub trait Category {
    /// Name used in error messages and configuration.
    const NAME: &'static str;
}

/// Associates a category with its default directive.
///
/// Per-site overrides are applied on top of the returned value.
pub trait DefaultDirective: Category {
    /// Returns the default directive for this category.
    fn directive() -> Directive;
}

/// Regex masking every character between the first one and the `@`.
///
/// This is `(?<=.).*(?=@)` with `.` spelled out as "anything but a line
/// terminator" (`\n`, `\r`, U+0085, U+2028, U+2029). A bare `.` would only
/// exclude `\n`, so a local part containing `\r` would be masked across it.
pub const EMAIL_REGEX: &str =
    r"(?<=[^\n\r\x{85}\x{2028}\x{2029}])[^\n\r\x{85}\x{2028}\x{2029}]*(?=@)";

macro_rules! category {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default)]
        pub struct $name;

        impl Category for $name {
            const NAME: &'static str = stringify!($name);
        }
    };
}

category!(
    /// Personal names. Masked entirely by default.
    Name
);
category!(
    /// Phone numbers. Keeps the first 3 and last 4 characters.
    PhoneNumber
);
category!(
    /// ID card numbers. Keeps the first 6 and last 4 characters.
    IdCardNumber
);
category!(
    /// Passwords. Masked entirely.
    Password
);
category!(
    /// Bank card numbers. Keeps the last 4 characters.
    BankCardNumber
);
category!(
    /// Email addresses. Masks the local part after its first character.
    Email
);
category!(
    /// Arbitrary strings. Masked entirely by default.
    Strings
);

impl DefaultDirective for Name {
    fn directive() -> Directive {
        Directive::new(Self::NAME)
    }
}

impl DefaultDirective for PhoneNumber {
    fn directive() -> Directive {
        Directive::new(Self::NAME)
            .with_start_offset(3)
            .with_end_offset(4)
    }
}

impl DefaultDirective for IdCardNumber {
    fn directive() -> Directive {
        Directive::new(Self::NAME)
            .with_start_offset(6)
            .with_end_offset(4)
    }
}

impl DefaultDirective for Password {
    fn directive() -> Directive {
        Directive::new(Self::NAME)
    }
}

impl DefaultDirective for BankCardNumber {
    fn directive() -> Directive {
        Directive::new(Self::NAME).with_end_offset(4)
    }
}

impl DefaultDirective for Email {
    fn directive() -> Directive {
        Directive::new(Self::NAME).with_regex(EMAIL_REGEX)
    }
}

impl DefaultDirective for Strings {
    fn directive() -> Directive {
        Directive::new(Self::NAME)
    }
}

/// Default directive of the built-in category called `name`.
///
/// Accepts the type name (`PhoneNumber`) as well as its snake case form
/// (`phone_number`).
pub fn builtin_directive(name: &str) -> Option<Directive> {
    let directive = match name {
        "Name" | "name" => Name::directive(),
        "PhoneNumber" | "phone_number" => PhoneNumber::directive(),
        "IdCardNumber" | "id_card_number" => IdCardNumber::directive(),
        "Password" | "password" => Password::directive(),
        "BankCardNumber" | "bank_card_number" => BankCardNumber::directive(),
        "Email" | "email" => Email::directive(),
        "Strings" | "strings" | "string" => Strings::directive(),
        _ => return None,
    };
    Some(directive)
}
