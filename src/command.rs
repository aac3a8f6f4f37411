//! Install command synthesis
//!
//! Builds the exact shell command text that adds a list of packages with npm
//! or Yarn. Nothing here executes; see [`crate::package_manager`].

use crate::domain::InstallOptions;
use crate::manifest::DependencyMap;

/// Build the install command for `names`
///
/// With `strict`, each package is pinned to its specifier in `source_versions`
/// (copied verbatim, so `^1.2.3` stays a caret range). A name missing from
/// `source_versions` is installed unpinned.
///
/// An empty `names` still produces a command; callers skip the install instead.
pub fn synthesize(
    names: &[String],
    source_versions: &DependencyMap,
    options: &InstallOptions,
) -> String {
    let manager = options.package_manager();

    let tokens: Vec<String> = names
        .iter()
        .map(|name| match source_versions.get(name) {
            Some(version) if options.strict => format!("{}@{}", name, version),
            _ => name.clone(),
        })
        .collect();

    let mut command = format!("{} {}", manager.add_command(), tokens.join(" "));

    if options.dev {
        command.push(' ');
        command.push_str(manager.dev_flag());
    } else if let Some(flag) = manager.save_flag() {
        command.push(' ');
        command.push_str(flag);
    }

    command
}
