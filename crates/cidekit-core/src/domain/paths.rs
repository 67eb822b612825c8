//! Relative-path derivation shared by the plan builder.

use std::path::{Component, Path, PathBuf};

/// Compute the relative path from `from` (a directory) to `to`.
///
/// Standard relative-path rules: strip the common prefix, ascend the
/// remainder of `from` with `..`, then descend into `to`. Returns `None`
/// when no relative path exists — mixed absolute/relative inputs, distinct
/// filesystem prefixes (drive letters), or an unresolvable `..` left in
/// `from`. Identical directories yield `.`.
pub fn relative_path(from: &Path, to: &Path) -> Option<PathBuf> {
    if from.is_absolute() != to.is_absolute() {
        return None;
    }

    let from_comps: Vec<Component> = from
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect();
    let to_comps: Vec<Component> = to
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect();

    let mut common = 0;
    while common < from_comps.len()
        && common < to_comps.len()
        && from_comps[common] == to_comps[common]
    {
        common += 1;
    }

    // Two absolute paths that share nothing sit on different roots.
    if from.is_absolute() && common == 0 {
        return None;
    }

    let mut rel = PathBuf::new();
    for comp in &from_comps[common..] {
        match comp {
            Component::Normal(_) => rel.push(".."),
            // A leftover ".." cannot be inverted without resolving the
            // filesystem, and this function must stay pure.
            Component::ParentDir => return None,
            _ => {}
        }
    }
    for comp in &to_comps[common..] {
        rel.push(comp);
    }

    if rel.as_os_str().is_empty() {
        rel.push(".");
    }
    Some(rel)
}

/// Render the relative path with forward slashes.
///
/// Descriptor files are byte-reproducible across platforms, so the
/// separator must not depend on the host.
pub fn relative_path_string(from: &Path, to: &Path) -> Option<String> {
    let rel = relative_path(from, to)?;
    let parts: Vec<String> = rel
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    Some(parts.join("/"))
}
