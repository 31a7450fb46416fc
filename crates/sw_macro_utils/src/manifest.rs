use std::collections::BTreeMap;
use std::env;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};
use std::time::SystemTime;

use toml_edit::{Document, Item, Table, TableLike};

/// The caller's `Cargo.toml`, used to find the path under which a workspace
/// crate is reachable from the code a proc-macro emits.
///
/// # Example
///
/// ```rust
/// # use sw_macro_utils::Manifest;
/// let p: syn::Path = Manifest::shared(|m| m.get_crate_path("sw_reflect"));
/// ```
///
/// # Resolution rules
///
/// 1. A dependency named `name` (or renamed from a package called `name`)
///    resolves to `::dep_name`.
/// 2. For names starting with `sw_`, a dependency on the umbrella crate
///    `structwalk` resolves to `::structwalk::short_name`
///    (e.g. `sw_reflect` -> `::structwalk::reflect`).
/// 3. Rules 1 and 2 are repeated for `dev-dependencies`.
/// 4. Otherwise the path is `::name`.
///
/// A crate that uses its own derive needs `extern crate self as name;`
/// in its root so that `::name` resolves inside the crate too.
#[derive(Debug)]
pub struct Manifest {
    pub manifest: Document<Box<str>>,
    pub modified_time: SystemTime,
}

const ENGINE_NAME: &str = "structwalk";
const ENGINE_PREFIX: &str = "sw_";

impl Manifest {
    #[inline(never)]
    fn get_manifest_path() -> PathBuf {
        env::var_os("CARGO_MANIFEST_DIR")
            .map(|path| {
                let mut path = PathBuf::from(path);
                path.push("Cargo.toml");
                assert!(
                    path.exists(),
                    "Cargo manifest does not exist at path {}",
                    path.display(),
                );
                path
            })
            .expect("CARGO_MANIFEST_DIR should be auto-defined by cargo.")
    }

    #[inline(never)]
    fn get_manifest_modified_time(path: &Path) -> Result<SystemTime, std::io::Error> {
        std::fs::metadata(path).and_then(|metadata| metadata.modified())
    }

    #[inline(never)]
    fn read_manifest(path: &Path) -> Document<Box<str>> {
        let manifest = std::fs::read_to_string(path)
            .unwrap_or_else(|_| panic!("Unable to read cargo manifest: {}", path.display()))
            .into_boxed_str();
        Self::parse_manifest(manifest)
            .unwrap_or_else(|_| panic!("Failed to parse cargo manifest: {}", path.display()))
    }

    #[inline]
    fn parse_manifest(source: Box<str>) -> Result<Document<Box<str>>, toml_edit::TomlError> {
        Document::parse(source)
    }

    #[inline]
    fn parse_str<T: syn::parse::Parse>(path: &str) -> T {
        syn::parse_str(path).unwrap_or_else(|_| panic!("`{path}` is not a valid path"))
    }

    // Dependency key under which the package `name` is available, following
    // `package = "..."` renames.
    fn dependency_key<'a>(deps: &'a Table, name: &str) -> Option<&'a str> {
        if deps.contains_key(name) {
            return Some(deps.key(name)?.get());
        }
        deps.iter().find_map(|(key, item)| {
            let package = item.as_table_like().and_then(|t: &dyn TableLike| t.get("package"))?;
            (package.as_str()? == name).then_some(key)
        })
    }

    fn find_in_deps(deps: &Table, name: &str) -> Option<syn::Path> {
        if let Some(key) = Self::dependency_key(deps, name) {
            return Some(Self::parse_str(&format!("::{key}")));
        }

        let module = name.strip_prefix(ENGINE_PREFIX)?;
        let engine = Self::dependency_key(deps, ENGINE_NAME)?;
        let mut path = Self::parse_str::<syn::Path>(&format!("::{engine}"));
        path.segments.push(Self::parse_str(module));
        Some(path)
    }

    /// Returns the path of the package `name` as seen from the caller.
    /// See the type-level documentation for the resolution order.
    #[inline(never)]
    pub fn get_crate_path(&self, name: &str) -> syn::Path {
        for section in ["dependencies", "dev-dependencies"] {
            if let Some(Item::Table(deps)) = self.manifest.get(section)
                && let Some(path) = Self::find_in_deps(deps, name)
            {
                return path;
            }
        }

        Self::parse_str(&format!("::{name}"))
    }

    /// Runs `func` with the caller's manifest.
    ///
    /// Manifests are cached per path and re-read when the file's modified
    /// time changes. Reading still takes a global lock, so call this once
    /// per macro invocation and keep the resulting path.
    pub fn shared<R>(func: impl FnOnce(&Self) -> R) -> R {
        static MANIFESTS: RwLock<BTreeMap<PathBuf, Manifest>> = RwLock::new(BTreeMap::new());

        let manifest_path = Self::get_manifest_path();
        let modified_time = Self::get_manifest_modified_time(&manifest_path)
            .expect("The Cargo.toml should have a modified time.");

        let manifests = MANIFESTS.read().unwrap_or_else(PoisonError::into_inner);

        if let Some(manifest) = manifests.get(&manifest_path)
            && manifest.modified_time == modified_time
        {
            return func(manifest);
        }

        drop(manifests);

        let manifest = Manifest {
            manifest: Self::read_manifest(&manifest_path),
            modified_time,
        };

        let result = func(&manifest);

        MANIFESTS
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(manifest_path, manifest);

        result
    }
}

#[cfg(test)]
mod tests {
    use super::Manifest;
    use std::time::SystemTime;

    fn manifest(source: &str) -> Manifest {
        Manifest {
            manifest: Manifest::parse_manifest(source.into()).unwrap(),
            modified_time: SystemTime::UNIX_EPOCH,
        }
    }

    fn path_string(path: syn::Path) -> String {
        path.segments
            .iter()
            .map(|s| s.ident.to_string())
            .collect::<Vec<_>>()
            .join("::")
    }

    #[test]
    fn direct_dependency() {
        let m = manifest("[dependencies]\nsw_reflect = \"0.0.1\"\n");
        assert_eq!(path_string(m.get_crate_path("sw_reflect")), "sw_reflect");
    }

    #[test]
    fn umbrella_dependency() {
        let m = manifest("[dependencies]\nstructwalk = { version = \"0.0.1\" }\n");
        assert_eq!(path_string(m.get_crate_path("sw_reflect")), "structwalk::reflect");
    }

    #[test]
    fn renamed_dependency() {
        let m = manifest("[dev-dependencies]\nwalk = { package = \"structwalk\", version = \"0.0.1\" }\n");
        assert_eq!(path_string(m.get_crate_path("sw_reflect")), "walk::reflect");
    }

    #[test]
    fn fallback_to_absolute() {
        let m = manifest("[package]\nname = \"demo\"\n");
        assert_eq!(path_string(m.get_crate_path("sw_reflect")), "sw_reflect");
    }
}
