use std::process::Command;

/// Availability of the external MKVToolNix tools
#[derive(Debug, Clone, Copy)]
pub struct DependencyStatus {
    pub inspector_ok: bool,
    pub editor_ok: bool,
}

impl DependencyStatus {
    /// Probe both tools. Neither being absent is fatal: the editor is
    /// never executed, and a missing inspector only yields per-file
    /// errors.
    pub fn check(inspector: &str, editor: &str) -> Self {
        Self {
            inspector_ok: check_command(inspector, &["--version"]),
            editor_ok: check_command(editor, &["--version"]),
        }
    }

    pub fn all_ok(&self) -> bool {
        self.inspector_ok && self.editor_ok
    }
}

/// Check if a command is available
fn check_command(cmd: &str, args: &[&str]) -> bool {
    Command::new(cmd)
        .args(args)
        .stdout(std::process::Stdio::null())
        .stderr(std::process::Stdio::null())
        .status()
        .is_ok_and(|s| s.success())
}
