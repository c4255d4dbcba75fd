//! Input/output seams for the interactive player
//!
//! User-facing lines never go through the logger: they go through the
//! `Console` trait so tests can capture output and feed canned answers to
//! the search selection prompt. Random video selection goes through
//! `IndexPicker` for the same reason.

use rand::Rng;
use std::collections::VecDeque;
use std::io::{self, BufRead};

/// Console seam - allows swapping the real terminal for a scripted one
pub trait Console {
    /// Print one line of user-facing output
    fn line(&mut self, text: &str);

    /// Read one line of input, None on end of input
    fn read_line(&mut self) -> Option<String>;
}

/// Real console backed by stdin/stdout
pub struct StdConsole;

impl StdConsole {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StdConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for StdConsole {
    fn line(&mut self, text: &str) {
        println!("{}", text);
    }

    fn read_line(&mut self) -> Option<String> {
        let mut buf = String::new();
        match io::stdin().lock().read_line(&mut buf) {
            Ok(0) => None,
            Ok(_) => Some(buf.trim_end_matches(['\r', '\n']).to_string()),
            Err(e) => {
                log::warn!("Failed to read from stdin: {}", e);
                None
            }
        }
    }
}

/// Scripted console: canned input lines, captured output
///
/// Used by the integration tests to drive the player and assert on the
/// exact lines it produced.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    input: VecDeque<String>,
    output: Vec<String>,
}

impl ScriptedConsole {
    /// Create a console with no scripted input (reads return None)
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a console that will answer reads with the given lines
    pub fn with_input(lines: &[&str]) -> Self {
        Self {
            input: lines.iter().map(|l| l.to_string()).collect(),
            output: Vec::new(),
        }
    }

    /// All lines printed so far
    pub fn output(&self) -> &[String] {
        &self.output
    }

    /// Drain the captured output
    pub fn take_output(&mut self) -> Vec<String> {
        std::mem::take(&mut self.output)
    }
}

impl Console for ScriptedConsole {
    fn line(&mut self, text: &str) {
        self.output.push(text.to_string());
    }

    fn read_line(&mut self) -> Option<String> {
        self.input.pop_front()
    }
}

/// Uniform index selection seam for random playback
pub trait IndexPicker {
    /// Pick an index in `[0, len)`; callers guarantee `len > 0`
    fn pick(&mut self, len: usize) -> usize;
}

/// Real picker backed by the thread-local RNG
pub struct ThreadRngPicker;

impl ThreadRngPicker {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ThreadRngPicker {
    fn default() -> Self {
        Self::new()
    }
}

impl IndexPicker for ThreadRngPicker {
    fn pick(&mut self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// Deterministic picker for tests: always returns the configured index,
/// clamped into range
#[derive(Debug, Clone, Copy)]
pub struct FixedPicker(pub usize);

impl IndexPicker for FixedPicker {
    fn pick(&mut self, len: usize) -> usize {
        self.0.min(len - 1)
    }
}
