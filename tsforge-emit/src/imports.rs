//! Import statement construction.
//!
//! Paths between generated files mirror the namespace hierarchy: each
//! namespace segment becomes a directory, and an importing file climbs
//! out of its own namespace depth before descending into the target's.

/// One import statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportLine {
    /// Imported symbol.
    pub name: String,
    /// Module path, relative to the importing file.
    pub path: String,
}

/// Converts a dotted namespace into a directory path.
#[must_use]
pub fn namespace_dir(namespace: &str) -> String {
    namespace.replace('.', "/")
}

/// Returns the `../` prefix that climbs out of the given namespace.
#[must_use]
pub fn relative_prefix(namespace: &str) -> String {
    if namespace.is_empty() {
        return String::new();
    }
    "../".repeat(namespace.split('.').count())
}

/// Builds the relative module path from a file in `from_namespace` to
/// the named module in `to_namespace`.
#[must_use]
pub fn module_path(from_namespace: &str, to_namespace: &str, module: &str) -> String {
    let descent = namespace_dir(to_namespace);
    let mut path = relative_prefix(from_namespace);
    if path.is_empty() {
        path.push_str("./");
    }
    if !descent.is_empty() {
        path.push_str(&descent);
        path.push('/');
    }
    path.push_str(module);
    path
}

/// Renders import statements, one line each, followed by a blank line
/// when any were rendered.
#[must_use]
pub fn render_imports(lines: &[ImportLine]) -> String {
    if lines.is_empty() {
        return String::new();
    }
    let mut output = String::new();
    for line in lines {
        output.push_str(&format!(
            "import {{ {} }} from \"{}\";\n",
            line.name, line.path
        ));
    }
    output.push('\n');
    output
}
