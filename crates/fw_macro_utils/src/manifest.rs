use std::collections::BTreeMap;
use std::env;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};
use std::time::SystemTime;

use toml_edit::{Document, Item, Table};

/// The parsed `Cargo.toml` of the crate that invokes a macro.
///
/// Generated code must name `fw_fields` the way the invoking crate sees it:
/// directly, or through the `fieldwise` facade.
///
/// # Example
///
/// ```rust
/// # use fw_macro_utils::Manifest;
/// let path: syn::Path = Manifest::shared(|m| m.get_crate_path("fw_fields"));
/// ```
///
/// # Resolution rules
///
/// 1. `name` is a dependency: `::name`.
/// 2. `name` starts with `fw_` and the facade `fieldwise` is a dependency:
///    `::fieldwise::<rest>` (e.g. `fw_fields` -> `::fieldwise::fields`).
/// 3. Rules 1 and 2 again for `dev-dependencies`.
/// 4. Fallback: `::name`.
///
/// A crate that names itself needs `extern crate self as name;` for rule 4 to
/// hold inside its own unit tests.
#[derive(Debug)]
pub struct Manifest {
    pub manifest: Document<Box<str>>,
    pub modified_time: SystemTime,
}

const FACADE_NAME: &str = "fieldwise";
const MEMBER_PREFIX: &str = "fw_";
const DEPENDENCY_TABLES: [&str; 2] = ["dependencies", "dev-dependencies"];

impl Manifest {
    #[inline(never)]
    fn manifest_path() -> PathBuf {
        let dir = env::var_os("CARGO_MANIFEST_DIR")
            .expect("CARGO_MANIFEST_DIR should be defined by cargo.");
        let path = PathBuf::from(dir).join("Cargo.toml");
        assert!(
            path.exists(),
            "Cargo manifest does not exist at path {}",
            path.display(),
        );
        path
    }

    #[inline(never)]
    fn load(path: &Path, modified_time: SystemTime) -> Self {
        let text = std::fs::read_to_string(path)
            .unwrap_or_else(|_| panic!("Unable to read cargo manifest: {}", path.display()));
        let manifest = Document::parse(text.into_boxed_str())
            .unwrap_or_else(|_| panic!("Failed to parse cargo manifest: {}", path.display()));
        Self {
            manifest,
            modified_time,
        }
    }

    fn absolute(segments: &[&str]) -> syn::Path {
        let text = segments
            .iter()
            .fold(String::new(), |acc, seg| acc + "::" + seg);
        syn::parse_str(&text).expect("crate names are valid paths")
    }

    fn resolve_in(deps: &Table, name: &str) -> Option<syn::Path> {
        if deps.contains_key(name) {
            return Some(Self::absolute(&[name]));
        }
        let module = name.strip_prefix(MEMBER_PREFIX)?;
        deps.contains_key(FACADE_NAME)
            .then(|| Self::absolute(&[FACADE_NAME, module]))
    }

    /// Return the path of crate `name` as seen from the invoking crate.
    ///
    /// See the type level documentation for the resolution rules.
    #[inline(never)]
    pub fn get_crate_path(&self, name: &str) -> syn::Path {
        DEPENDENCY_TABLES
            .iter()
            .filter_map(|table| match self.manifest.get(table) {
                Some(Item::Table(deps)) => Some(deps),
                _ => None,
            })
            .find_map(|deps| Self::resolve_in(deps, name))
            .unwrap_or_else(|| Self::absolute(&[name]))
    }

    /// Run `func` with the invoking crate's manifest.
    ///
    /// Manifests are cached per path and reloaded when the file changes.
    /// Reading is not free, so call this once per macro invocation.
    pub fn shared<R>(func: impl FnOnce(&Self) -> R) -> R {
        static MANIFESTS: RwLock<BTreeMap<PathBuf, Manifest>> = RwLock::new(BTreeMap::new());

        let path = Self::manifest_path();
        let modified_time = std::fs::metadata(&path)
            .and_then(|meta| meta.modified())
            .expect("The Cargo.toml should have a modified time.");

        {
            let cache = MANIFESTS.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(manifest) = cache.get(&path)
                && manifest.modified_time == modified_time
            {
                return func(manifest);
            }
        }

        let manifest = Self::load(&path, modified_time);
        let result = func(&manifest);

        MANIFESTS
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(path, manifest);

        result
    }
}

#[cfg(test)]
mod tests {
    use super::Manifest;

    fn path_string(path: &syn::Path) -> String {
        let segments: Vec<String> = path.segments.iter().map(|s| s.ident.to_string()).collect();
        let prefix = if path.leading_colon.is_some() { "::" } else { "" };
        format!("{prefix}{}", segments.join("::"))
    }

    fn manifest(text: &str) -> Manifest {
        Manifest {
            manifest: toml_edit::Document::parse(text.to_owned().into_boxed_str()).unwrap(),
            modified_time: std::time::SystemTime::UNIX_EPOCH,
        }
    }

    #[test]
    fn direct_dependency() {
        let m = manifest("[dependencies]\nfw_fields = \"0.0.1\"\n");
        assert_eq!(path_string(&m.get_crate_path("fw_fields")), "::fw_fields");
    }

    #[test]
    fn through_facade() {
        let m = manifest("[dependencies]\nfieldwise = \"0.0.1\"\n");
        assert_eq!(
            path_string(&m.get_crate_path("fw_fields")),
            "::fieldwise::fields"
        );
    }

    #[test]
    fn dev_dependency_and_fallback() {
        let m = manifest("[dev-dependencies]\nfieldwise = \"0.0.1\"\n");
        assert_eq!(
            path_string(&m.get_crate_path("fw_fields")),
            "::fieldwise::fields"
        );

        let empty = manifest("[package]\nname = \"x\"\n");
        assert_eq!(path_string(&empty.get_crate_path("fw_fields")), "::fw_fields");
    }
}
