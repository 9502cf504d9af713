//! Password entry from the terminal.

use console::Term;
use jampzip_core::SecretPrompt;
use std::io;
use std::io::BufRead;
use std::io::IsTerminal;

/// Reads passwords from the controlling terminal with echo disabled.
///
/// When stdin is not a terminal (piped input, scripts, tests), one line is
/// read from stdin instead.
pub struct TerminalPrompt {
    term: Term,
}

impl TerminalPrompt {
    pub fn new() -> Self {
        Self {
            term: Term::stderr(),
        }
    }
}

impl Default for TerminalPrompt {
    fn default() -> Self {
        Self::new()
    }
}

impl SecretPrompt for TerminalPrompt {
    fn read_secret(&mut self, prompt: &str) -> io::Result<String> {
        self.term.write_str(prompt)?;

        if io::stdin().is_terminal() {
            return self.term.read_secure_line();
        }

        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        self.term.write_line("")?;
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}
