//! Human readable rendering of reflected values.
//!
//! Records render as `TypeName(member, ...)`, sequences as `[...]` and maps
//! as `{...}`, with every member, element and entry named. Scalars carry
//! their type unless the output is compact. With an indent level the output
//! spans several lines, four spaces per level.
//!
//! ```
//! use fw_fields::{Fields, describe, describe_compact};
//!
//! #[derive(Fields, Default)]
//! struct Pixel {
//!     x: u16,
//!     y: u16,
//!     alpha: Option<u8>,
//! }
//!
//! let pixel = Pixel { x: 3, y: 4, alpha: None };
//! assert_eq!(describe(&pixel).to_string(), "Pixel(x: u16 = 3, y: u16 = 4)");
//! assert_eq!(describe_compact(&pixel).to_string(), "Pixel(x: 3, y: 4)");
//! assert_eq!(
//!     describe_compact(&pixel).indent(0).to_string(),
//!     "Pixel(\n    x: 3,\n    y: 4)"
//! );
//! ```

use alloc::string::ToString;
use core::fmt::{self, Write};

use crate::ops::{Array, Map, Record};
use crate::{Reflect, ReflectRef, Scalar};

// -----------------------------------------------------------------------------
// Entry points

/// Describe `value` with type annotations.
#[inline]
pub fn describe(value: &dyn Reflect) -> Describe<'_> {
    Describe::new(value)
}

/// Describe `value` without type annotations.
#[inline]
pub fn describe_compact(value: &dyn Reflect) -> Describe<'_> {
    Describe::new(value).verbose_types(false)
}

/// A [`Display`](fmt::Display) adapter rendering a reflected value.
#[derive(Clone, Copy)]
pub struct Describe<'a> {
    value: &'a dyn Reflect,
    name: Option<&'a str>,
    level: Option<usize>,
    verbose: bool,
    colored: bool,
}

impl<'a> Describe<'a> {
    #[inline]
    pub fn new(value: &'a dyn Reflect) -> Self {
        Self {
            value,
            name: None,
            level: None,
            verbose: true,
            colored: false,
        }
    }

    /// Prefix the output with `name: `.
    #[inline]
    pub fn named(mut self, name: &'a str) -> Self {
        self.name = Some(name);
        self
    }

    /// Render over several lines, starting at indent `level`.
    #[inline]
    pub fn indent(mut self, level: usize) -> Self {
        self.level = Some(level);
        self
    }

    #[inline]
    pub fn verbose_types(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Color names, record types and scalar types.
    ///
    /// Has no effect without the `color` feature.
    #[inline]
    pub fn colored(mut self, colored: bool) -> Self {
        self.colored = colored;
        self
    }
}

impl fmt::Display for Describe<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut describer = Describer {
            out: f,
            level: self.level,
            verbose: self.verbose,
            colored: self.colored,
            first: true,
        };
        describer.render(self.name, self.value)
    }
}

// -----------------------------------------------------------------------------
// Describer

#[derive(Clone, Copy)]
enum Paint {
    Name,
    Record,
    Type,
}

/// The output state handed to [`CustomDescribe`](crate::hooks::CustomDescribe).
///
/// Inside a record, [`member`](Self::member) renders one named member with
/// the separators and indentation of the surrounding output.
pub struct Describer<'a> {
    out: &'a mut dyn fmt::Write,
    level: Option<usize>,
    verbose: bool,
    colored: bool,
    first: bool,
}

impl Describer<'_> {
    #[inline]
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    #[inline]
    pub fn is_colored(&self) -> bool {
        self.colored
    }

    /// Current indent level; `None` for single-line output.
    #[inline]
    pub fn level(&self) -> Option<usize> {
        self.level
    }

    #[inline]
    pub fn write_str(&mut self, text: &str) -> fmt::Result {
        self.out.write_str(text)
    }

    #[inline]
    pub fn write_fmt(&mut self, args: fmt::Arguments<'_>) -> fmt::Result {
        self.out.write_fmt(args)
    }

    /// Render `value` as the next member named `name`.
    pub fn member(&mut self, name: &str, value: &dyn Reflect) -> fmt::Result {
        if !self.first {
            // Indented members start on a new line from `prefix`.
            let separator = if self.level.is_some() { "," } else { ", " };
            self.out.write_str(separator)?;
        }
        self.first = false;

        let level = self.level;
        self.level = level.map(|level| level + 1);
        let result = self.render(Some(name), value);
        self.level = level;
        result
    }

    fn group(&mut self, f: impl FnOnce(&mut Self) -> fmt::Result) -> fmt::Result {
        let first = core::mem::replace(&mut self.first, true);
        let result = f(self);
        self.first = first;
        result
    }

    #[cfg(feature = "color")]
    fn paint(&mut self, text: &str, paint: Paint) -> fmt::Result {
        use owo_colors::OwoColorize;

        if !self.colored {
            return self.out.write_str(text);
        }
        match paint {
            Paint::Name => write!(self.out, "{}", text.green()),
            Paint::Record => write!(self.out, "{}", text.cyan()),
            Paint::Type => write!(self.out, "{}", text.yellow()),
        }
    }

    #[cfg(not(feature = "color"))]
    fn paint(&mut self, text: &str, _: Paint) -> fmt::Result {
        self.out.write_str(text)
    }

    fn prefix(&mut self, name: Option<&str>) -> fmt::Result {
        if let Some(level) = self.level.filter(|&level| level > 0) {
            self.out.write_char('\n')?;
            for _ in 0..level {
                self.out.write_str("    ")?;
            }
        }
        if let Some(name) = name {
            self.paint(name, Paint::Name)?;
            self.out.write_str(": ")?;
        }
        Ok(())
    }

    fn render(&mut self, name: Option<&str>, value: &dyn Reflect) -> fmt::Result {
        let view = value.reflect_ref();
        if let ReflectRef::Optional(optional) = view
            && let Some(inner) = optional.get()
        {
            return self.render(name, inner);
        }

        self.prefix(name)?;

        if let ReflectRef::Record(record) = view {
            self.paint(value.type_name(), Paint::Record)?;
            self.out.write_char('(')?;
            self.group(|d| match value.describe_custom(d) {
                Some(result) => result,
                None => d.members(record),
            })?;
            return self.out.write_char(')');
        }

        if let Some(result) = value.describe_custom(self) {
            return result;
        }

        if self.verbose {
            self.paint(value.type_name(), Paint::Type)?;
            self.out.write_str(" = ")?;
        }

        match view {
            ReflectRef::Array(array) => self.elements(array),
            ReflectRef::List(list) => self.elements(list.as_array()),
            ReflectRef::Map(map) => self.entries(map),
            ReflectRef::Enum(enumeration) => match enumeration.variant_name() {
                Some(name) => self.out.write_str(name),
                None => write!(self.out, "{}", enumeration.discriminant()),
            },
            ReflectRef::Scalar(scalar) => self.scalar(scalar),
            ReflectRef::Optional(_) => self.out.write_str("None"),
            ReflectRef::Marker => self.out.write_str("()"),
            ReflectRef::Record(_) => Ok(()),
        }
    }

    fn members(&mut self, record: &dyn Record) -> fmt::Result {
        for (info, member) in record.iter_fields() {
            if !info.is_data() || crate::convert::is_absent(member) {
                continue;
            }
            self.member(info.name(), member)?;
        }
        Ok(())
    }

    fn elements(&mut self, array: &dyn Array) -> fmt::Result {
        self.out.write_char('[')?;
        self.group(|d| {
            for (index, element) in array.iter().enumerate() {
                d.member(&index.to_string(), element)?;
            }
            Ok(())
        })?;
        self.out.write_char(']')
    }

    fn entries(&mut self, map: &dyn Map) -> fmt::Result {
        self.out.write_char('{')?;
        self.group(|d| {
            for (key, value) in map.entries() {
                d.member(&key, value)?;
            }
            Ok(())
        })?;
        self.out.write_char('}')
    }

    fn scalar(&mut self, scalar: Scalar<'_>) -> fmt::Result {
        match scalar {
            Scalar::Bool(v) => write!(self.out, "{v}"),
            Scalar::I8(v) => write!(self.out, "{v}"),
            Scalar::I16(v) => write!(self.out, "{v}"),
            Scalar::I32(v) => write!(self.out, "{v}"),
            Scalar::I64(v) => write!(self.out, "{v}"),
            Scalar::Isize(v) => write!(self.out, "{v}"),
            Scalar::U8(v) => write!(self.out, "{v}"),
            Scalar::U16(v) => write!(self.out, "{v}"),
            Scalar::U32(v) => write!(self.out, "{v}"),
            Scalar::U64(v) => write!(self.out, "{v}"),
            Scalar::Usize(v) => write!(self.out, "{v}"),
            Scalar::F32(v) => write!(self.out, "{v}"),
            Scalar::F64(v) => write!(self.out, "{v}"),
            Scalar::Char(v) => write!(self.out, "{v:?}"),
            Scalar::Str(v) => write!(self.out, "{v:?}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::collections::BTreeMap;
    use alloc::string::{String, ToString};
    use alloc::vec::Vec;
    use core::fmt;

    use super::{Describer, describe, describe_compact};
    use crate::Fields;
    use crate::hooks::CustomDescribe;

    #[derive(Fields, Default, Clone, Copy)]
    #[fields(numeric)]
    enum Level {
        #[default]
        Low = 1,
        High = 2,
    }

    #[derive(Fields, Default)]
    struct Entry {
        level: Level,
        byte: u8,
        label: String,
    }

    #[derive(Fields, Default)]
    struct Log {
        entries: Vec<Entry>,
        counts: BTreeMap<char, u32>,
        owner: Option<String>,
    }

    #[derive(Fields, Default)]
    #[fields(custom(describe))]
    struct Secret {
        value: String,
    }

    impl CustomDescribe for Secret {
        fn describe(&self, describer: &mut Describer<'_>) -> fmt::Result {
            write!(describer, "<{} chars>", self.value.len())
        }
    }

    #[test]
    fn verbose_nested() {
        let log = Log {
            entries: vec![Entry {
                level: Level::High,
                byte: b'A',
                label: "start".into(),
            }],
            counts: BTreeMap::from([('a', 2)]),
            owner: Some("ops".into()),
        };

        assert_eq!(
            describe(&log).to_string(),
            "Log(entries: Vec<Entry> = [0: Entry(level: Level = High, byte: u8 = 65, \
             label: String = \"start\")], counts: BTreeMap<char, u32> = {a: u32 = 2}, \
             owner: String = \"ops\")"
        );
        assert_eq!(
            describe_compact(&log.counts).named("counts").to_string(),
            "counts: {a: 2}"
        );
    }

    #[test]
    fn indented_levels() {
        let entry = Entry::default();
        assert_eq!(
            describe_compact(&entry).indent(0).to_string(),
            "Entry(\n    level: Low,\n    byte: 0,\n    label: \"\")"
        );

        let log = Log {
            entries: vec![Entry::default(), Entry::default()],
            counts: BTreeMap::from([('a', 1), ('b', 2)]),
            owner: None,
        };
        let text = describe(&log).indent(1).to_string();
        assert!(text.lines().count() > 1);
        assert!(text.lines().all(|line| !line.ends_with(' ')), "{text:?}");
        assert_eq!(
            describe_compact(&None::<u8>).to_string(),
            "None"
        );
    }

    #[test]
    fn custom_rendering_inside_record() {
        let secret = Secret {
            value: "hunter2".into(),
        };
        assert_eq!(describe(&secret).to_string(), "Secret(<7 chars>)");
    }

    #[cfg(feature = "color")]
    #[test]
    fn colors_are_opt_in() {
        let entry = Entry::default();
        assert!(!describe(&entry).to_string().contains('\u{1b}'));
        assert!(describe(&entry).colored(true).to_string().contains('\u{1b}'));
    }
}
