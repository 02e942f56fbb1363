//! Line commands typed at the prompt.

use clap::{Parser, Subcommand};

use postdesk_core::domain::DraftField;

/// One prompt line. The first word picks the command.
#[derive(Parser, Debug)]
#[command(multicall = true)]
pub struct Line {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Reload the posts
    #[command(name = "list", visible_alias = "reload")]
    Reload,

    /// Filter by title (no text clears the filter)
    Search {
        #[arg(num_args = 0.., trailing_var_arg = true, allow_hyphen_values = true)]
        text: Vec<String>,
    },

    /// Publish/unpublish a post (asks first)
    #[command(name = "block", visible_aliases = ["unblock", "toggle"])]
    Toggle { id: u64 },

    /// Delete a post (asks first)
    #[command(visible_alias = "rm")]
    Delete { id: u64 },

    /// Accept the open confirmation
    #[command(name = "yes", visible_aliases = ["y", "confirm"])]
    Confirm,

    /// Decline the open confirmation
    #[command(name = "no", visible_aliases = ["n", "cancel"])]
    Cancel,

    /// Open the new post form
    #[command(name = "add", visible_alias = "new")]
    OpenForm,

    /// Close the new post form, keeping the draft
    #[command(name = "close")]
    CloseForm,

    /// Edit a draft field (title, image, date)
    #[command(name = "set")]
    Edit {
        field: DraftField,
        #[arg(num_args = 0.., trailing_var_arg = true, allow_hyphen_values = true)]
        value: Vec<String>,
    },

    /// Submit the draft
    #[command(visible_alias = "submit")]
    Publish,

    /// Clear the draft (asks first)
    Reset,

    /// Hide the last failure notice
    Dismiss,

    #[command(visible_aliases = ["exit", "q"])]
    Quit,
}

/// Parse a prompt line. Blank lines yield `None`; `help` and bad input come
/// back as a clap error whose text is ready to print.
pub fn parse_line(line: &str) -> Result<Option<Command>, clap::Error> {
    if line.trim().is_empty() {
        return Ok(None);
    }
    Line::try_parse_from(line.split_whitespace()).map(|line| Some(line.command))
}

/// Rejoin words split off the prompt line.
pub fn words(words: Vec<String>) -> String {
    words.join(" ")
}
