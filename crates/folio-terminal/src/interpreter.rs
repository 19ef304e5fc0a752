//! Command trait, registry, and lookup logic.
//!
//! The registry keeps commands in registration order. That order drives the
//! `help` listing, completion candidates and "did you mean" suggestions.

use std::collections::HashMap;

use folio_types::error::Result;
use folio_types::profile::Profile;

/// Output produced by a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutput {
    /// Text to render, possibly containing style markup.
    Text(String),
    /// Command produced no visible output.
    None,
    /// Signal to clear the scrollback.
    Clear,
}

/// Read-only context passed to every command.
pub struct Environment<'a> {
    /// Portfolio data the commands render.
    pub profile: &'a Profile,
    /// The registry the command was dispatched from.
    pub registry: &'a CommandRegistry,
}

/// A single executable command.
pub trait Command {
    /// The command name (what the user types).
    fn name(&self) -> &str;

    /// One-line description for `help`.
    fn description(&self) -> &str;

    /// Usage string (e.g. "skills \[group\]").
    fn usage(&self) -> &str;

    /// Execute the command with the given arguments.
    fn execute(&self, args: &[&str], env: &Environment<'_>) -> Result<CommandOutput>;
}

struct Entry {
    /// Case-folded lookup key.
    name: String,
    command: Box<dyn Command>,
}

/// Registry of available commands.
pub struct CommandRegistry {
    entries: Vec<Entry>,
    index: HashMap<String, usize>,
}

impl CommandRegistry {
    /// Create an empty command registry.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Register a command under its case-folded name.
    ///
    /// Re-registering a name replaces the handler but keeps the slot it was
    /// first registered in.
    pub fn register(&mut self, command: Box<dyn Command>) {
        let name = fold(command.name());
        match self.index.get(&name).copied() {
            Some(slot) => {
                log::debug!("replacing command '{name}'");
                self.entries[slot].command = command;
            },
            None => {
                self.index.insert(name.clone(), self.entries.len());
                self.entries.push(Entry { name, command });
            },
        }
    }

    /// Look up a command by name, ignoring case.
    pub fn get(&self, name: &str) -> Option<&dyn Command> {
        self.index
            .get(&fold(name))
            .map(|&slot| self.entries[slot].command.as_ref())
    }

    /// Whether a command with this name exists, ignoring case.
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(&fold(name))
    }

    /// Registered (folded) names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    /// Return (name, description) pairs in registration order.
    pub fn list_commands(&self) -> Vec<(&str, &str)> {
        self.entries
            .iter()
            .map(|e| (e.name.as_str(), e.command.description()))
            .collect()
    }

    /// Return every command name starting with `partial` (case-insensitive).
    pub fn completions(&self, partial: &str) -> Vec<&str> {
        let lower = fold(partial);
        self.names()
            .filter(|name| name.starts_with(&lower))
            .collect()
    }

    /// Return command names that look like what the user meant by `typed`.
    ///
    /// A name is suggested when either string contains the other, or when the
    /// two are one edit apart.
    pub fn suggestions(&self, typed: &str) -> Vec<&str> {
        let typed = fold(typed);
        if typed.is_empty() {
            return Vec::new();
        }
        self.names()
            .filter(|name| {
                name.contains(typed.as_str())
                    || typed.contains(name)
                    || within_one_edit(name, &typed)
            })
            .collect()
    }

    /// Number of registered commands.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Case-fold a command name.
pub(crate) fn fold(name: &str) -> String {
    name.to_lowercase()
}

/// True when `a` and `b` differ by exactly one insertion, deletion or
/// substitution.
fn within_one_edit(a: &str, b: &str) -> bool {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let (short, long) = if a.len() <= b.len() { (&a, &b) } else { (&b, &a) };
    if long.len() - short.len() > 1 {
        return false;
    }

    let mut i = 0;
    let mut j = 0;
    let mut edits = 0;
    while i < short.len() && j < long.len() {
        if short[i] == long[j] {
            i += 1;
            j += 1;
            continue;
        }
        edits += 1;
        if edits > 1 {
            return false;
        }
        if short.len() == long.len() {
            i += 1;
        }
        j += 1;
    }
    edits + (long.len() - j) + (short.len() - i) == 1
}
