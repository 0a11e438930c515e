//! Domain layer: values that are sensitive and types that contain them.
//!
//! - [`SensitiveValue`]: string-like leaves a directive applies to.
//! - [`Maskable`]: carries one directive through wrappers down to every leaf.
//! - [`Blurrable`]: cascades into records and containers.
//! - [`Blur`]: the user-facing `.blur()` method.
//!
//! ## Field Handling
//!
//! | Annotation | Generated Code | Behavior |
//! |------------|----------------|----------|
//! | None | Pass through | Field unchanged |
//! | `#[blur]` | `Blurrable::blur_with` | Cascade into the field |
//! | `#[blur(Category, ..)]` | `Maskable::mask_with` | Apply the resolved directive |
//!
//! Maps are masked and cascaded on their values only; keys are never touched.

use std::{
    borrow::Cow,
    collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque},
    hash::{BuildHasher, Hash},
};

use super::{
    directive::Directive,
    engine::{Blurrer, Masker},
};
use crate::error::BlurError;

// =============================================================================
// SensitiveValue - Types that ARE sensitive data (leaf values)
// =============================================================================

/// String-like payloads that can be masked.
///
/// `from_masked` receives a string with exactly as many characters as
/// `as_str` returned.
///
/// If the sensitive type comes from another crate, wrap it in a local newtype
/// and implement `SensitiveValue` for the wrapper.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a `SensitiveValue`",
    label = "this type cannot be masked directly",
    note = "categories like `#[blur(Email)]` are for string-like values",
    note = "if `{Self}` derives `Blur`, use `#[blur]` instead to cascade into it"
)]
pub trait SensitiveValue: Sized {
    /// Read-only view of the value.
    fn as_str(&self) -> &str;
    /// Rebuilds the value from its masked form.
    #[must_use]
    fn from_masked(masked: String) -> Self;
}

impl SensitiveValue for String {
    fn as_str(&self) -> &str {
        self.as_str()
    }

    fn from_masked(masked: String) -> Self {
        masked
    }
}

impl SensitiveValue for Cow<'_, str> {
    fn as_str(&self) -> &str {
        self.as_ref()
    }

    fn from_masked(masked: String) -> Self {
        Cow::Owned(masked)
    }
}

impl SensitiveValue for Box<str> {
    fn as_str(&self) -> &str {
        self
    }

    fn from_masked(masked: String) -> Self {
        masked.into_boxed_str()
    }
}

// =============================================================================
// Maskable - Applying one directive through wrappers
// =============================================================================

/// Values a directive can be applied to, at any nesting depth.
///
/// Leaves are [`SensitiveValue`]s; `Option`, sequences, sets, `Box` and map
/// values forward the directive to their contents.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be masked with a category",
    label = "no string-like leaf reachable here",
    note = "`#[blur(Category)]` applies to String, Cow<str>, Box<str> and Option/Vec/array/map values of them"
)]
pub trait Maskable: Sized {
    /// Applies `directive` to every leaf of `self`.
    fn mask_with<M: Masker>(self, directive: &Directive, masker: &M) -> Result<Self, BlurError>;
}

macro_rules! impl_maskable_leaf {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Maskable for $ty {
                fn mask_with<M: Masker>(self, directive: &Directive, masker: &M) -> Result<Self, BlurError> {
                    masker.mask(self, directive)
                }
            }
        )*
    };
}

impl_maskable_leaf!(String, Cow<'_, str>, Box<str>);

impl<T: Maskable> Maskable for Option<T> {
    fn mask_with<M: Masker>(self, directive: &Directive, masker: &M) -> Result<Self, BlurError> {
        self.map(|value| value.mask_with(directive, masker))
            .transpose()
    }
}

impl<T: Maskable> Maskable for Box<T> {
    fn mask_with<M: Masker>(self, directive: &Directive, masker: &M) -> Result<Self, BlurError> {
        (*self).mask_with(directive, masker).map(Box::new)
    }
}

impl<T: Maskable> Maskable for Vec<T> {
    fn mask_with<M: Masker>(self, directive: &Directive, masker: &M) -> Result<Self, BlurError> {
        self.into_iter()
            .map(|value| value.mask_with(directive, masker))
            .collect()
    }
}

impl<T: Maskable> Maskable for VecDeque<T> {
    fn mask_with<M: Masker>(self, directive: &Directive, masker: &M) -> Result<Self, BlurError> {
        self.into_iter()
            .map(|value| value.mask_with(directive, masker))
            .collect()
    }
}

impl<T: Maskable, const N: usize> Maskable for [T; N] {
    fn mask_with<M: Masker>(self, directive: &Directive, masker: &M) -> Result<Self, BlurError> {
        let masked = self
            .into_iter()
            .map(|value| value.mask_with(directive, masker))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(into_array(masked))
    }
}

impl<K, V, S> Maskable for HashMap<K, V, S>
where
    K: Hash + Eq,
    V: Maskable,
    S: BuildHasher + Clone,
{
    fn mask_with<M: Masker>(self, directive: &Directive, masker: &M) -> Result<Self, BlurError> {
        let mut result = HashMap::with_capacity_and_hasher(self.len(), self.hasher().clone());
        for (key, value) in self {
            result.insert(key, value.mask_with(directive, masker)?);
        }
        Ok(result)
    }
}

impl<K: Ord, V: Maskable> Maskable for BTreeMap<K, V> {
    fn mask_with<M: Masker>(self, directive: &Directive, masker: &M) -> Result<Self, BlurError> {
        self.into_iter()
            .map(|(key, value)| Ok((key, value.mask_with(directive, masker)?)))
            .collect()
    }
}

impl<T, S> Maskable for HashSet<T, S>
where
    T: Maskable + Hash + Eq,
    S: BuildHasher + Clone,
{
    fn mask_with<M: Masker>(self, directive: &Directive, masker: &M) -> Result<Self, BlurError> {
        let mut result = HashSet::with_capacity_and_hasher(self.len(), self.hasher().clone());
        for value in self {
            result.insert(value.mask_with(directive, masker)?);
        }
        Ok(result)
    }
}

impl<T: Maskable + Ord> Maskable for BTreeSet<T> {
    fn mask_with<M: Masker>(self, directive: &Directive, masker: &M) -> Result<Self, BlurError> {
        self.into_iter()
            .map(|value| value.mask_with(directive, masker))
            .collect()
    }
}

// =============================================================================
// Blurrable - Types that CONTAIN sensitive data (cascading)
// =============================================================================

/// A type that can be walked for annotated leaves.
///
/// Implemented by `#[derive(Blur)]` and by common std containers, which
/// cascade into their elements (map values only). Plain strings and scalars
/// carry no directive and pass through unchanged.
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not implement `Blurrable`",
    label = "this type cannot be cascaded into",
    note = "use `#[derive(Blur)]` on the type definition",
    note = "or use `#[blur(Category)]` if this is a string-like leaf"
)]
pub trait Blurrable: Sized {
    /// Masks every annotated leaf reachable from `self`.
    fn blur_with<M: Masker>(self, masker: &M) -> Result<Self, BlurError>;
}

/// Public entrypoint for masking on traversable types.
///
/// Blanket-implemented for every [`Blurrable`].
pub trait Blur: Blurrable {
    /// Masks the value with the process-wide [`Blurrer`].
    ///
    /// This consumes `self`; clone first to keep the original.
    fn blur(self) -> Result<Self, BlurError> {
        blur(self)
    }
}

impl<T: Blurrable> Blur for T {}

/// Masks `value` with the process-wide [`Blurrer`].
pub fn blur<T: Blurrable>(value: T) -> Result<T, BlurError> {
    value.blur_with(Blurrer::shared())
}

macro_rules! impl_blurrable_passthrough {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Blurrable for $ty {
                fn blur_with<M: Masker>(self, _masker: &M) -> Result<Self, BlurError> {
                    Ok(self)
                }
            }
        )*
    };
}

impl_blurrable_passthrough!(
    String,
    Cow<'_, str>,
    Box<str>,
    bool,
    char,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    f32,
    f64,
    (),
);

impl<T: Blurrable> Blurrable for Option<T> {
    fn blur_with<M: Masker>(self, masker: &M) -> Result<Self, BlurError> {
        self.map(|value| value.blur_with(masker)).transpose()
    }
}

impl<T: Blurrable, E: Blurrable> Blurrable for Result<T, E> {
    fn blur_with<M: Masker>(self, masker: &M) -> Result<Self, BlurError> {
        Ok(match self {
            Ok(value) => Ok(value.blur_with(masker)?),
            Err(err) => Err(err.blur_with(masker)?),
        })
    }
}

impl<T: Blurrable> Blurrable for Box<T> {
    fn blur_with<M: Masker>(self, masker: &M) -> Result<Self, BlurError> {
        (*self).blur_with(masker).map(Box::new)
    }
}

impl<T: Blurrable> Blurrable for Vec<T> {
    fn blur_with<M: Masker>(self, masker: &M) -> Result<Self, BlurError> {
        self.into_iter().map(|value| value.blur_with(masker)).collect()
    }
}

impl<T: Blurrable> Blurrable for VecDeque<T> {
    fn blur_with<M: Masker>(self, masker: &M) -> Result<Self, BlurError> {
        self.into_iter().map(|value| value.blur_with(masker)).collect()
    }
}

impl<T: Blurrable, const N: usize> Blurrable for [T; N] {
    fn blur_with<M: Masker>(self, masker: &M) -> Result<Self, BlurError> {
        let blurred = self
            .into_iter()
            .map(|value| value.blur_with(masker))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(into_array(blurred))
    }
}

impl<K, V, S> Blurrable for HashMap<K, V, S>
where
    K: Hash + Eq,
    V: Blurrable,
    S: BuildHasher + Clone,
{
    fn blur_with<M: Masker>(self, masker: &M) -> Result<Self, BlurError> {
        let mut result = HashMap::with_capacity_and_hasher(self.len(), self.hasher().clone());
        for (key, value) in self {
            result.insert(key, value.blur_with(masker)?);
        }
        Ok(result)
    }
}

impl<K: Ord, V: Blurrable> Blurrable for BTreeMap<K, V> {
    fn blur_with<M: Masker>(self, masker: &M) -> Result<Self, BlurError> {
        self.into_iter()
            .map(|(key, value)| Ok((key, value.blur_with(masker)?)))
            .collect()
    }
}

impl<T, S> Blurrable for HashSet<T, S>
where
    T: Blurrable + Hash + Eq,
    S: BuildHasher + Clone,
{
    fn blur_with<M: Masker>(self, masker: &M) -> Result<Self, BlurError> {
        let mut result = HashSet::with_capacity_and_hasher(self.len(), self.hasher().clone());
        for value in self {
            result.insert(value.blur_with(masker)?);
        }
        Ok(result)
    }
}

impl<T: Blurrable + Ord> Blurrable for BTreeSet<T> {
    fn blur_with<M: Masker>(self, masker: &M) -> Result<Self, BlurError> {
        self.into_iter().map(|value| value.blur_with(masker)).collect()
    }
}

/// Rebuilds an array from the element-wise results of an `[T; N]`.
fn into_array<T, const N: usize>(values: Vec<T>) -> [T; N] {
    match values.try_into() {
        Ok(array) => array,
        Err(_) => unreachable!("element-wise masking keeps the array length"),
    }
}

#[cfg(test)]
mod tests {
    use std::{
        borrow::Cow,
        collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque},
    };

    use super::{Blur, Maskable, SensitiveValue};
    use crate::{Blurrer, DefaultDirective, Email, Strings};

    // =========================================================================
    // SensitiveValue tests
    // =========================================================================

    #[test]
    fn cow_from_masked_is_owned() {
        let original: Cow<'static, str> = Cow::Borrowed("secret");
        assert_eq!(SensitiveValue::as_str(&original), "secret");
        match Cow::from_masked("******".to_string()) {
            Cow::Owned(value) => assert_eq!(value, "******"),
            Cow::Borrowed(_) => panic!("masked Cow should be owned"),
        }
    }

    #[test]
    fn boxed_str_keeps_its_type() {
        let masked = Box::<str>::from("abc")
            .mask_with(&Strings::directive(), &Blurrer::new())
            .unwrap();
        assert_eq!(&*masked, "***");
    }

    // =========================================================================
    // Maskable tests
    // =========================================================================

    #[test]
    fn option_none_passes_through() {
        let value: Option<String> = None;
        let masked = value
            .mask_with(&Strings::directive(), &Blurrer::new())
            .unwrap();
        assert_eq!(masked, None);
    }

    #[test]
    fn sequences_mask_every_element() {
        let blurrer = Blurrer::new();
        let values = vec!["123456".to_string(); 3];
        let masked = values.mask_with(&Strings::directive(), &blurrer).unwrap();
        assert!(masked.iter().all(|value| value == "******"));

        let deque: VecDeque<String> = ["ab".to_string()].into_iter().collect();
        let masked = deque.mask_with(&Strings::directive(), &blurrer).unwrap();
        assert_eq!(masked.front().map(String::as_str), Some("**"));
    }

    #[test]
    fn arrays_mask_every_element_in_place() {
        let codes = ["123".to_string(), String::new(), "ab".to_string()];
        let masked = codes
            .mask_with(&Strings::directive(), &Blurrer::new())
            .unwrap();
        assert_eq!(masked, ["***".to_string(), String::new(), "**".to_string()]);

        let empty: [String; 0] = [];
        assert!(empty
            .mask_with(&Strings::directive(), &Blurrer::new())
            .unwrap()
            .is_empty());
    }

    #[test]
    fn maps_mask_values_and_keep_keys() {
        let mut map: HashMap<String, String> = HashMap::new();
        map.insert("0".to_string(), "0".to_string());
        map.insert("mail".to_string(), "alice@example.com".to_string());
        let masked = map
            .mask_with(&Email::directive(), &Blurrer::new())
            .unwrap();
        assert_eq!(masked["0"], "0");
        assert_eq!(masked["mail"], "a****@example.com");

        let tree: BTreeMap<u8, Option<String>> = [(1, Some("abc".to_string())), (2, None)]
            .into_iter()
            .collect();
        let masked = tree
            .mask_with(&Strings::directive(), &Blurrer::new())
            .unwrap();
        assert_eq!(masked[&1].as_deref(), Some("***"));
        assert_eq!(masked[&2], None);
    }

    #[test]
    fn sets_collapse_equal_masked_elements() {
        let set: HashSet<String> = ["ab".to_string(), "cd".to_string()].into_iter().collect();
        let masked = set
            .mask_with(&Strings::directive(), &Blurrer::new())
            .unwrap();
        assert_eq!(masked.len(), 1);
        assert!(masked.contains("**"));

        let ordered: BTreeSet<String> = ["x@a".to_string()].into_iter().collect();
        let masked = ordered
            .mask_with(&Email::directive(), &Blurrer::new())
            .unwrap();
        assert!(masked.contains("x@a"));
    }

    #[test]
    fn first_failing_element_aborts_the_container() {
        let values = vec!["12345".to_string(), "1".to_string()];
        let directive = Strings::directive().with_start_offset(2);
        let err = values
            .mask_with(&directive, &Blurrer::new())
            .unwrap_err();
        assert_eq!(err.category(), "Strings");
    }

    // =========================================================================
    // Blurrable tests
    // =========================================================================

    #[test]
    fn plain_values_pass_through() {
        assert_eq!("secret".to_string().blur().unwrap(), "secret");
        assert_eq!(42_u32.blur().unwrap(), 42);
        let nested: Vec<Option<HashMap<u8, String>>> = vec![None];
        assert_eq!(nested.blur().unwrap(), vec![None]);
    }

    #[test]
    fn result_cascades_into_both_sides() {
        let ok: Result<String, String> = Ok("a".to_string());
        assert_eq!(ok.blur().unwrap(), Ok("a".to_string()));
        let err: Result<String, String> = Err("b".to_string());
        assert_eq!(err.blur().unwrap(), Err("b".to_string()));
    }
}
