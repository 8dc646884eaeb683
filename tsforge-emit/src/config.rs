//! Emission configuration.

/// Configuration for rendering and layout. One immutable value threaded
/// through the emit calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitConfig {
    /// Display name of the command contract interface; also the file
    /// name of the emitted contract declaration.
    pub contract_name: String,
    /// Prepend the generation warning header to every file.
    pub include_header: bool,
}

impl Default for EmitConfig {
    fn default() -> Self {
        Self {
            contract_name: "ICommand".to_string(),
            include_header: true,
        }
    }
}
