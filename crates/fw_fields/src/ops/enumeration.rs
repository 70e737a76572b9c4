use crate::Reflect;
use crate::info::EnumInfo;

/// A fieldless enumeration.
///
/// # Example
///
/// ```
/// use fw_fields::{Enumeration, Fields};
///
/// #[derive(Fields, Debug, PartialEq)]
/// enum Level {
///     Low,
///     #[fields(rename = "HIGH")]
///     High = 10,
/// }
///
/// let mut level = Level::Low;
/// assert_eq!(level.variant_name(), Some("Low"));
/// assert!(level.set_variant_name("HIGH"));
/// assert_eq!(level, Level::High);
/// assert_eq!(level.discriminant(), 10);
/// ```
pub trait Enumeration: Reflect {
    fn enum_info(&self) -> &'static EnumInfo;

    fn discriminant(&self) -> i64;

    /// Switch to the variant with `discriminant`; `false` if there is none.
    fn set_discriminant(&mut self, discriminant: i64) -> bool;

    fn variant_name(&self) -> Option<&'static str> {
        self.enum_info()
            .by_discriminant(self.discriminant())
            .map(|variant| variant.name())
    }

    /// Switch to the variant named (or aliased) `name`; `false` if there is none.
    fn set_variant_name(&mut self, name: &str) -> bool {
        match self.enum_info().by_name(name) {
            Some(variant) => self.set_discriminant(variant.discriminant()),
            None => false,
        }
    }
}
