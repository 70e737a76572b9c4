use alloc::string::String;

use crate::info::GenericInfoCell;

/// [`core::any::type_name`] with module paths removed.
///
/// ```
/// use fw_fields::info::short_type_name;
///
/// assert_eq!(short_type_name::<Vec<Option<String>>>(), "Vec<Option<String>>");
/// assert_eq!(short_type_name::<[u8; 4]>(), "[u8; 4]");
/// ```
pub fn short_type_name<T: ?Sized + 'static>() -> &'static str {
    static CELL: GenericInfoCell<String> = GenericInfoCell::new();
    CELL.get_or_insert::<T>(|| strip_paths(core::any::type_name::<T>()))
}

fn strip_paths(full: &str) -> String {
    let mut out = String::with_capacity(full.len());
    let mut segment_start = 0;
    for (index, ch) in full.char_indices() {
        if ch.is_alphanumeric() || ch == '_' || ch == ':' {
            continue;
        }
        push_last_segment(&mut out, &full[segment_start..index]);
        out.push(ch);
        segment_start = index + ch.len_utf8();
    }
    push_last_segment(&mut out, &full[segment_start..]);
    out
}

fn push_last_segment(out: &mut String, path: &str) {
    out.push_str(path.rsplit("::").next().unwrap_or(path));
}

#[cfg(test)]
mod tests {
    use super::strip_paths;

    #[test]
    fn strips_nested_paths() {
        assert_eq!(
            strip_paths("alloc::collections::btree::map::BTreeMap<alloc::string::String, my::Item>"),
            "BTreeMap<String, Item>"
        );
        assert_eq!(strip_paths("(i32, core::option::Option<u8>)"), "(i32, Option<u8>)");
        assert_eq!(strip_paths("f64"), "f64");
    }
}
