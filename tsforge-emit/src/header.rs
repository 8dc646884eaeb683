//! Generation warning header.

use chrono::Utc;

/// Tool name stamped into generated files.
pub const TOOL_NAME: &str = "TsForge";

/// Returns the comment block prepended to every generated file.
#[must_use]
pub fn generation_warning() -> String {
    let stamp = Utc::now().format("%Y-%m-%d %H:%M:%S UTC");
    format!(
        "// <auto-generated>\n\
         //     Generated by {TOOL_NAME} {} at {stamp}.\n\
         //     Changes to this file will be lost if the code is regenerated.\n\
         // </auto-generated>\n\n",
        env!("CARGO_PKG_VERSION")
    )
}
