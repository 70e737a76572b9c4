/// The integer type an enumeration is stored as in binary form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Repr {
    I8,
    I16,
    I32,
    I64,
    Isize,
    U8,
    U16,
    U32,
    U64,
    Usize,
}

impl Repr {
    /// Encoded width in bytes.
    pub const fn width(self) -> usize {
        match self {
            Self::I8 | Self::U8 => 1,
            Self::I16 | Self::U16 => 2,
            Self::I32 | Self::U32 => 4,
            Self::I64 | Self::U64 | Self::Isize | Self::Usize => 8,
        }
    }
}

/// One variant of a fieldless enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariantInfo {
    name: &'static str,
    alternate_names: &'static [&'static str],
    discriminant: i64,
}

impl VariantInfo {
    #[inline]
    pub const fn new(name: &'static str, discriminant: i64) -> Self {
        Self {
            name,
            alternate_names: &[],
            discriminant,
        }
    }

    #[inline]
    pub const fn with_alternate_names(mut self, names: &'static [&'static str]) -> Self {
        self.alternate_names = names;
        self
    }

    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub const fn alternate_names(&self) -> &'static [&'static str] {
        self.alternate_names
    }

    #[inline]
    pub const fn discriminant(&self) -> i64 {
        self.discriminant
    }

    pub fn matches(&self, text: &str) -> bool {
        self.name == text || self.alternate_names.contains(&text)
    }
}

/// The name table of a fieldless enumeration.
///
/// When `named` is set the enumeration is written as its variant name,
/// otherwise as its discriminant.
///
/// ```
/// use fw_fields::{EnumInfo, Repr, VariantInfo};
///
/// static INFO: EnumInfo = EnumInfo::new(
///     "Mode",
///     &[VariantInfo::new("Off", 0), VariantInfo::new("On", 1)],
///     Repr::U8,
/// );
/// assert_eq!(INFO.by_name("On").map(|v| v.discriminant()), Some(1));
/// assert_eq!(INFO.by_discriminant(0).map(|v| v.name()), Some("Off"));
/// ```
#[derive(Debug)]
pub struct EnumInfo {
    type_name: &'static str,
    variants: &'static [VariantInfo],
    repr: Repr,
    named: bool,
}

impl EnumInfo {
    #[inline]
    pub const fn new(type_name: &'static str, variants: &'static [VariantInfo], repr: Repr) -> Self {
        Self {
            type_name,
            variants,
            repr,
            named: true,
        }
    }

    /// Drop the string mapping; the enumeration is written as a number.
    #[inline]
    pub const fn numeric(mut self) -> Self {
        self.named = false;
        self
    }

    #[inline]
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }

    #[inline]
    pub const fn variants(&self) -> &'static [VariantInfo] {
        self.variants
    }

    #[inline]
    pub const fn repr(&self) -> Repr {
        self.repr
    }

    #[inline]
    pub const fn is_named(&self) -> bool {
        self.named
    }

    pub fn by_name(&self, text: &str) -> Option<&'static VariantInfo> {
        self.variants.iter().find(|variant| variant.matches(text))
    }

    pub fn by_discriminant(&self, discriminant: i64) -> Option<&'static VariantInfo> {
        self.variants
            .iter()
            .find(|variant| variant.discriminant == discriminant)
    }
}
