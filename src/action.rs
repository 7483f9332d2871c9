use crate::config::Platform;
use crate::output::{emit, Rendered};
use log::warn;
use std::process::{Command, Stdio};

/// Every occurrence of this token in an action template is replaced by the
/// matched subject before the command runs.
pub const SUBJECT_TOKEN: &str = "{}";

/// Substitutes `subject` for every [`SUBJECT_TOKEN`] in the template.
pub fn substitute(template: &str, subject: &str) -> String {
    template.replace(SUBJECT_TOKEN, subject)
}

/// Runs a user-specified command template against matched subjects.
/// Invoked at most once per match, and only when a template is configured.
pub struct ActionDispatcher {
    template: String,
    platform: Platform,
}

impl ActionDispatcher {
    pub fn new(template: impl Into<String>, platform: Platform) -> Self {
        Self {
            template: template.into(),
            platform,
        }
    }

    /// Executes the substituted command line for one subject. Launch
    /// failures go to the error stream and never abort the caller.
    pub fn dispatch(&self, subject: &str) {
        let command_line = substitute(&self.template, subject);
        match self.platform {
            Platform::Windows => self.run_through_shell(&command_line),
            Platform::Posix => self.run_direct(&command_line),
        }
    }

    /// Splits the command line on whitespace (empty tokens dropped) and
    /// runs it as a direct child sharing this process's streams, blocking
    /// until it exits.
    fn run_direct(&self, command_line: &str) {
        let mut tokens = command_line.split_whitespace();
        let Some(program) = tokens.next() else {
            eprintln!("action template {:?} produced an empty command", self.template);
            return;
        };
        let status = Command::new(program)
            .args(tokens)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status();
        match status {
            Ok(status) if !status.success() => {
                warn!("action {command_line:?} exited with {status}");
            }
            Ok(_) => {}
            Err(err) => eprintln!("cannot launch action {command_line:?}: {err}"),
        }
    }

    /// Shell-centric platforms get the whole line handed to the shell, with
    /// its output captured and printed as one block.
    fn run_through_shell(&self, command_line: &str) {
        match Command::new("cmd").args(["/C", command_line]).output() {
            Ok(output) => {
                let text = String::from_utf8_lossy(&output.stdout).into_owned();
                if !text.is_empty() {
                    emit(&Rendered::Block(text));
                }
            }
            Err(err) => eprintln!("cannot launch action {command_line:?}: {err}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_is_replaced_everywhere() {
        assert_eq!(substitute("wc -l {}", "/tmp/a.c"), "wc -l /tmp/a.c");
        assert_eq!(substitute("cp {} {}.bak", "x"), "cp x x.bak");
    }

    #[test]
    fn token_free_template_is_untouched() {
        assert_eq!(substitute("ls -l", "/tmp/a.c"), "ls -l");
    }

    #[test]
    fn subject_lands_only_at_token_positions() {
        let cmd = substitute("stat {}", "/etc/hosts");
        assert_eq!(cmd.matches("/etc/hosts").count(), 1);
        assert!(cmd.starts_with("stat "));
    }

    #[cfg(unix)]
    #[test]
    fn launch_failure_does_not_panic() {
        let dispatcher =
            ActionDispatcher::new("definitely-not-a-command-zz {}", Platform::Posix);
        dispatcher.dispatch("/tmp/a.c");
    }

    #[cfg(unix)]
    #[test]
    fn successful_action_blocks_until_exit() {
        let dispatcher = ActionDispatcher::new("true {}", Platform::Posix);
        dispatcher.dispatch("subject");
    }
}
