//! Common utility functions shared across the codebase.

use std::path::{Component, Path, PathBuf};

/// Builds the manifest path for `file`: `/` followed by its path relative to
/// `root`, with `/` separators.
///
/// Both paths are normalized lexically first, so `.` and `..` segments in
/// either one are resolved without touching the filesystem. Files outside
/// `root` keep the `..` segments needed to reach them.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use routable::utils::route_path;
///
/// assert_eq!(route_path(Path::new("/app"), Path::new("/app/src/a.ts")), "/src/a.ts");
/// assert_eq!(route_path(Path::new("/app/web"), Path::new("/app/lib/b.ts")), "/../lib/b.ts");
/// ```
pub fn route_path(root: &Path, file: &Path) -> String {
    let relative = relative_components(&normalize(root), &normalize(file));
    format!("/{}", relative.join("/"))
}

fn relative_components(root: &Path, file: &Path) -> Vec<String> {
    if let Ok(stripped) = file.strip_prefix(root) {
        return component_names(stripped);
    }

    let root_parts: Vec<Component> = root.components().collect();
    let file_parts: Vec<Component> = file.components().collect();
    let common = root_parts
        .iter()
        .zip(&file_parts)
        .take_while(|(a, b)| a == b)
        .count();

    let mut parts: Vec<String> = root_parts[common..]
        .iter()
        .map(|_| "..".to_string())
        .collect();
    parts.extend(
        file_parts[common..]
            .iter()
            .filter_map(|c| component_name(*c)),
    );
    parts
}

/// Drop `.` segments and fold each `..` into the segment before it. A `..`
/// with nothing left to fold is kept, except directly under the root.
fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match normalized.components().next_back() {
                Some(Component::Normal(_)) => {
                    normalized.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => normalized.push(".."),
            },
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}

fn component_names(path: &Path) -> Vec<String> {
    path.components().filter_map(component_name).collect()
}

fn component_name(component: Component) -> Option<String> {
    match component {
        Component::Normal(name) => Some(name.to_string_lossy().into_owned()),
        Component::ParentDir => Some("..".to_string()),
        Component::CurDir | Component::RootDir | Component::Prefix(_) => None,
    }
}
