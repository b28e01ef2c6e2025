//! Command line parsing
//!
//! Parses `mcp-directory <command> [args]` into a [`Command`].

use crate::catalog::Category;

/// Parsed command from the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Open the directory window (default)
    Open,
    /// Run one search and print the results: search <query...>
    Search { query: String },
    /// Print the directory: list [category]
    List { category: Option<Category> },
    /// Print one directory entry: show <id>
    Show { id: String },
    /// Print category ids and titles
    Categories,
    /// Probe the search backend
    Health,
    /// Show help
    Help,
    /// Bad input; the message says what went wrong
    Invalid { message: String },
}

impl Command {
    /// Parse the arguments that follow the program name
    pub fn parse<S: AsRef<str>>(args: &[S]) -> Self {
        let Some(cmd) = args.first() else {
            return Command::Open;
        };
        let cmd = cmd.as_ref().to_lowercase();
        let rest: Vec<&str> = args[1..].iter().map(|a| a.as_ref()).collect();

        match cmd.as_str() {
            "open" | "ui" => Command::Open,
            "search" | "s" => {
                let query = rest.join(" ").trim().to_string();
                if query.is_empty() {
                    Command::Invalid {
                        message: "Usage: mcp-directory search <query>".to_string(),
                    }
                } else {
                    Command::Search { query }
                }
            }
            "list" | "ls" => match rest.first() {
                None => Command::List { category: None },
                Some(id) => match id.parse::<Category>() {
                    Ok(category) => Command::List {
                        category: Some(category),
                    },
                    Err(e) => Command::Invalid {
                        message: format!("{}. Run 'mcp-directory categories' for valid ids.", e),
                    },
                },
            },
            "show" => match rest.first() {
                Some(id) => Command::Show { id: id.to_string() },
                None => Command::Invalid {
                    message: "Usage: mcp-directory show <server-id>".to_string(),
                },
            },
            "categories" => Command::Categories,
            "health" | "status" => Command::Health,
            "help" | "--help" | "-h" => Command::Help,
            _ => Command::Invalid {
                message: format!("Unknown command: {}. Run 'mcp-directory help' for usage.", cmd),
            },
        }
    }

    pub fn help_text() -> &'static str {
        r#"MCP Directory - find the MCP servers for your needs

Usage: mcp-directory [command]

Commands:
  (none), open         Open the directory window
  search <query>       Search the backend and print the top 3 results
  list [category]      Print the directory, optionally a single category
  show <server-id>     Print one directory entry
  categories           Print category ids
  health               Check that the search backend is reachable
  help                 Show this help message

Environment:
  MCP_DIRECTORY_API_BASE_URL   Search backend (default http://127.0.0.1:5000/api)
  MCP_DIRECTORY_CHECK_HEALTH   Probe the backend when the window opens
  MCP_DIRECTORY_SHOW_SEARCH    Show the search panel (default true)
  RUST_LOG                     Log filter, e.g. mcp_directory=debug"#
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_args_opens_window() {
        let args: [&str; 0] = [];
        assert_eq!(Command::parse(&args), Command::Open);
    }

    #[test]
    fn test_parse_search_joins_words() {
        match Command::parse(&["search", "best", "servers", "for", "web", "search"]) {
            Command::Search { query } => assert_eq!(query, "best servers for web search"),
            other => panic!("Expected Search, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_search_without_query() {
        assert!(matches!(Command::parse(&["search"]), Command::Invalid { .. }));
    }

    #[test]
    fn test_parse_list() {
        assert_eq!(Command::parse(&["list"]), Command::List { category: None });
        assert_eq!(
            Command::parse(&["ls", "development"]),
            Command::List {
                category: Some(Category::Development)
            }
        );
        assert!(matches!(Command::parse(&["list", "databases"]), Command::Invalid { .. }));
    }

    #[test]
    fn test_parse_show() {
        assert_eq!(
            Command::parse(&["show", "github-mcp"]),
            Command::Show {
                id: "github-mcp".to_string()
            }
        );
        assert!(matches!(Command::parse(&["show"]), Command::Invalid { .. }));
    }

    #[test]
    fn test_parse_is_case_insensitive_for_commands() {
        assert_eq!(Command::parse(&["HELP"]), Command::Help);
        assert_eq!(Command::parse(&["Health"]), Command::Health);
    }

    #[test]
    fn test_unknown_command() {
        match Command::parse(&["deploy"]) {
            Command::Invalid { message } => assert!(message.contains("deploy")),
            other => panic!("Expected Invalid, got {:?}", other),
        }
    }
}
