// Dweve binmat - Binary Matrix Distance Toolkit
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Shell completion generation - Tab completion for various shells

use clap::Command;
use clap_complete::{generate, Generator};
use std::io;

/// Write the completion script for `cmd` to stdout.
///
/// # Examples
///
/// ```no_run
/// use clap::Command;
/// use clap_complete::shells::Bash;
/// use binmat_cli::commands::generate_completion_for_command;
///
/// let mut cmd = Command::new("binmat");
/// generate_completion_for_command(Bash, &mut cmd);
/// ```
pub fn generate_completion_for_command<G: Generator>(generator: G, cmd: &mut Command) {
    let name = cmd.get_name().to_string();
    generate(generator, cmd, name, &mut io::stdout());
}

/// Shell-specific instructions for installing completions.
///
/// Shell names are case-insensitive. Unknown shells yield
/// `"Unsupported shell"`.
///
/// # Examples
///
/// ```
/// use binmat_cli::commands::print_installation_instructions;
///
/// assert!(print_installation_instructions("bash").contains("bash"));
/// assert_eq!(print_installation_instructions("unknown"), "Unsupported shell");
/// ```
pub fn print_installation_instructions(shell: &str) -> String {
    match shell.to_lowercase().as_str() {
        "bash" => {
            r#"# Bash completion installation:

# For current session only:
eval "$(binmat completion bash)"

# Or save to completions directory:
binmat completion bash > ~/.local/share/bash-completion/completions/binmat
"#
        }
        "zsh" => {
            r#"# Zsh completion installation:

# Save to a directory in $fpath:
binmat completion zsh > ~/.zsh/completions/_binmat
"#
        }
        "fish" => {
            r#"# Fish completion installation:

binmat completion fish > ~/.config/fish/completions/binmat.fish
"#
        }
        "powershell" | "pwsh" => {
            r#"# PowerShell completion installation:

# Add this line to your profile ($PROFILE):
binmat completion powershell | Out-String | Invoke-Expression
"#
        }
        "elvish" => {
            r#"# Elvish completion installation:

# Add this line to ~/.elvish/rc.elv:
eval (binmat completion elvish)
"#
        }
        _ => "Unsupported shell",
    }
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_installation_instructions_known_shells() {
        for shell in ["bash", "zsh", "fish", "powershell", "elvish"] {
            let instructions = print_installation_instructions(shell);
            assert!(instructions.contains("binmat completion"), "shell {}", shell);
        }
    }

    #[test]
    fn test_installation_instructions_case_insensitive() {
        assert_eq!(
            print_installation_instructions("BASH"),
            print_installation_instructions("bash")
        );
        assert_eq!(
            print_installation_instructions("pwsh"),
            print_installation_instructions("powershell")
        );
    }

    #[test]
    fn test_installation_instructions_unsupported() {
        assert_eq!(print_installation_instructions("tcsh"), "Unsupported shell");
    }
}
