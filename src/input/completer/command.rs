use std::collections::BTreeMap;

use rustyline::completion::Pair;

use crate::core::commands::{CommandExecutor, CommandSpec};

#[derive(Clone)]
pub struct CommandCompleter {
    commands: BTreeMap<&'static str, &'static CommandSpec>,
}

impl CommandCompleter {
    pub fn new(executor: &CommandExecutor) -> Self {
        let commands = executor
            .names()
            .filter_map(|name| executor.spec_for(name).map(|spec| (name, spec)))
            .collect();
        Self { commands }
    }

    pub fn is_known(&self, word: &str) -> bool {
        self.commands.contains_key(word.to_lowercase().as_str())
    }

    pub fn complete_command(&self, prefix: &str) -> Vec<Pair> {
        let prefix = prefix.to_lowercase();
        self.commands
            .keys()
            .filter(|name| name.starts_with(&prefix))
            .map(|name| Pair {
                display: name.to_string(),
                replacement: name.to_string(),
            })
            .collect()
    }

    /// Placeholders still missing from a line like `cp a ` → `<dest>`.
    /// Only offered once the cursor sits after whitespace.
    pub fn usage_hint(&self, line: &str) -> Option<String> {
        if !line.ends_with(char::is_whitespace) {
            return None;
        }

        let mut words = line.split_whitespace();
        let name = words.next()?.to_lowercase();
        let spec = self.commands.get(name.as_str())?;
        let typed = words.count();

        let remaining: Vec<&str> = spec.usage.split_whitespace().skip(1 + typed).collect();
        if remaining.is_empty() {
            None
        } else {
            Some(remaining.join(" "))
        }
    }
}
