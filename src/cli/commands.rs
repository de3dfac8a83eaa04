//! Command definitions for the interactive loop
//!
//! Defines the actions a user can type at the main prompt.

/// A command that can be typed at the main prompt
#[derive(Debug, Clone)]
pub struct Command {
    /// Command name (what user types)
    pub name: &'static str,
    /// Command action
    pub action: CommandAction,
}

/// Actions the session can perform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandAction {
    Add,
    Remove,
    Import,
    Export,
    Ask,
    Exit,
    Log,
    HardestCard,
    ResetStats,
}

/// All available commands, in prompt order
pub static COMMANDS: &[Command] = &[
    Command {
        name: "add",
        action: CommandAction::Add,
    },
    Command {
        name: "remove",
        action: CommandAction::Remove,
    },
    Command {
        name: "import",
        action: CommandAction::Import,
    },
    Command {
        name: "export",
        action: CommandAction::Export,
    },
    Command {
        name: "ask",
        action: CommandAction::Ask,
    },
    Command {
        name: "exit",
        action: CommandAction::Exit,
    },
    Command {
        name: "log",
        action: CommandAction::Log,
    },
    Command {
        name: "hardest card",
        action: CommandAction::HardestCard,
    },
    Command {
        name: "reset stats",
        action: CommandAction::ResetStats,
    },
];

impl CommandAction {
    /// Parse a line typed at the main prompt (case-insensitive)
    pub fn parse(input: &str) -> Option<Self> {
        find_command(input).map(|c| c.action)
    }
}

/// Find a command by name
pub fn find_command(name: &str) -> Option<&'static Command> {
    let name = name.trim().to_lowercase();
    COMMANDS.iter().find(|c| c.name == name)
}

/// The main prompt listing every command
pub fn action_prompt() -> String {
    let names: Vec<_> = COMMANDS.iter().map(|c| c.name).collect();
    format!("Input the action ({}):", names.join(", "))
}
