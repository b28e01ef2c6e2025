//! Static MCP server directory
//!
//! The dataset is built once on first access and never mutated. Category
//! groups are derived by filtering it on every call.

use once_cell::sync::Lazy;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    FileManagement,
    WebBrowsing,
    Communication,
    Development,
}

impl Category {
    /// Display order of the directory sections
    pub const ALL: [Category; 4] = [
        Category::FileManagement,
        Category::WebBrowsing,
        Category::Communication,
        Category::Development,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Category::FileManagement => "file-management",
            Category::WebBrowsing => "web-browsing",
            Category::Communication => "communication",
            Category::Development => "development",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Category::FileManagement => "File Management",
            Category::WebBrowsing => "Web Browsing/Scraping",
            Category::Communication => "Communication/Collaboration",
            Category::Development => "Code and Development",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.id() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// A directory entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerRecord {
    pub id: String,
    pub name: String,
    pub provider: String,
    pub description: String,
    pub logo_url: Option<String>,
    pub tags: Vec<String>,
    pub category: Category,
}

/// A titled slice of the directory, derived from [`servers`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryGroup {
    pub id: &'static str,
    pub title: &'static str,
    pub servers: Vec<&'static ServerRecord>,
}

fn server(
    id: &str,
    name: &str,
    provider: &str,
    description: &str,
    tags: &[&str],
    category: Category,
) -> ServerRecord {
    ServerRecord {
        id: id.to_string(),
        name: name.to_string(),
        provider: provider.to_string(),
        description: description.to_string(),
        logo_url: None,
        tags: tags.iter().map(|t| t.to_string()).collect(),
        category,
    }
}

static SERVERS: Lazy<Vec<ServerRecord>> = Lazy::new(|| {
    use Category::*;

    vec![
        server(
            "dropbox-mcp",
            "Dropbox MCP",
            "dropbox",
            "Access and manage your Dropbox files directly through MCP protocol",
            &["storage", "files"],
            FileManagement,
        ),
        server(
            "gdrive-mcp",
            "Google Drive MCP",
            "google",
            "Connect to Google Drive for seamless file access and management",
            &["storage", "google"],
            FileManagement,
        ),
        server(
            "onedrive-mcp",
            "OneDrive MCP Server",
            "microsoft",
            "Microsoft OneDrive integration for document access and collaboration",
            &["storage", "microsoft"],
            FileManagement,
        ),
        server(
            "s3-mcp",
            "S3 Bucket MCP",
            "aws",
            "Connect to AWS S3 buckets for cloud storage access via MCP",
            &["cloud", "aws"],
            FileManagement,
        ),
        server(
            "perplexity-mcp",
            "Perplexity Ask MCP",
            "ppl-ai",
            "A Model Context Protocol Server connector for Perplexity API, to enable web search without leaving the MCP environment",
            &["search", "web"],
            WebBrowsing,
        ),
        server(
            "tavily-mcp",
            "Tavily MCP Server 🚀",
            "tavily-ai",
            "Advanced search capabilities for AI assistants via MCP protocol",
            &["search", "ai"],
            WebBrowsing,
        ),
        server(
            "browserless-mcp",
            "Browserless MCP",
            "browserless",
            "Headless browser automation and web scraping through MCP",
            &["browser", "automation"],
            WebBrowsing,
        ),
        server(
            "scrapeowl-mcp",
            "ScrapeOwl MCP",
            "scrapeowl",
            "Web scraping and data extraction service with MCP integration",
            &["scraping", "data"],
            WebBrowsing,
        ),
        server(
            "slack-mcp",
            "Slack MCP",
            "slack",
            "Connect to Slack workspaces and channels through MCP protocol",
            &["messaging", "teams"],
            Communication,
        ),
        server(
            "notion-mcp",
            "Notion MCP",
            "notion",
            "Access and update Notion workspaces and databases via MCP",
            &["notes", "collaboration"],
            Communication,
        ),
        server(
            "teams-mcp",
            "Microsoft Teams MCP",
            "microsoft",
            "Integrate with Microsoft Teams for communication and collaboration",
            &["messaging", "microsoft"],
            Communication,
        ),
        server(
            "discord-mcp",
            "Discord MCP",
            "discord",
            "Connect to Discord servers and channels through MCP protocol",
            &["messaging", "community"],
            Communication,
        ),
        server(
            "github-mcp",
            "GitHub MCP",
            "github",
            "Access GitHub repositories, issues, and pull requests via MCP",
            &["git", "code"],
            Development,
        ),
        server(
            "vscode-mcp",
            "VS Code MCP",
            "microsoft",
            "Connect to VS Code for code editing and development workflows",
            &["editor", "ide"],
            Development,
        ),
        server(
            "replit-mcp",
            "Replit MCP",
            "replit",
            "Access Replit workspaces and collaborate on code through MCP",
            &["coding", "cloud"],
            Development,
        ),
        server(
            "figma-mcp",
            "Framelink Figma MCP",
            "GLips",
            "MCP server to provide Figma layout information to AI coding agents like Cursor",
            &["design", "ui"],
            Development,
        ),
    ]
});

/// The full directory in insertion order
pub fn servers() -> &'static [ServerRecord] {
    &SERVERS
}

/// Records of one category, in insertion order
pub fn servers_by_category(category: Category) -> Vec<&'static ServerRecord> {
    servers()
        .iter()
        .filter(|server| server.category == category)
        .collect()
}

/// All four groups in display order
pub fn categories() -> Vec<CategoryGroup> {
    Category::ALL
        .into_iter()
        .map(|category| CategoryGroup {
            id: category.id(),
            title: category.title(),
            servers: servers_by_category(category),
        })
        .collect()
}

pub fn find_server(id: &str) -> Option<&'static ServerRecord> {
    servers().iter().find(|server| server.id == id)
}
