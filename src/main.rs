//! MCP Directory: find the MCP servers for your needs
//!
//! Usage:
//!   mcp-directory                  - Open the directory window
//!   mcp-directory search <query>   - Search the backend from the terminal
//!   mcp-directory list [category]  - Print the directory
//!   mcp-directory help             - Show help

mod app;
mod backend;
mod catalog;
mod commands;
mod config;
mod error;
mod faq;
mod search;
mod ui;

use app::Directory;
use backend::api::SearchClient;
use commands::Command;
use config::Config;
use iced::{window, Size};
use search::SearchPanel;
use std::env;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    // Initialize logging (use try_init so a second init is harmless)
    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    let args: Vec<String> = env::args().skip(1).collect();
    let config = Config::load();

    run(Command::parse(&args), config)
}

fn start_app(config: Config) -> iced::Result {
    tracing::info!("Opening MCP Directory (search backend: {})", config.api_base_url);

    iced::application(Directory::title, Directory::update, Directory::view)
        .theme(Directory::theme)
        .window(window::Settings {
            size: Size::new(1280.0, 900.0),
            min_size: Some(Size::new(800.0, 600.0)),
            position: window::Position::Centered,
            ..Default::default()
        })
        .antialiasing(true)
        .run_with(move || Directory::new(config))
}

fn run(command: Command, config: Config) -> ExitCode {
    match command {
        Command::Open => match start_app(config) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                tracing::error!("Window closed with error: {}", e);
                ExitCode::FAILURE
            }
        },
        Command::Search { query } => with_runtime(|rt| {
            let client = SearchClient::new(&config.api_base_url);
            let mut panel = SearchPanel::new();
            panel.set_query(query);

            if let Some(request) = panel.submit() {
                let outcome = rt.block_on(client.search(&request));
                panel.finish(outcome);
            }

            if !panel.error().is_empty() {
                eprintln!("Error: {}", panel.error());
                return ExitCode::FAILURE;
            }
            print_results(&panel);
            ExitCode::SUCCESS
        }),
        Command::List { category } => {
            for group in catalog::categories() {
                if category.is_some_and(|c| c.id() != group.id) {
                    continue;
                }
                println!("{} ({})", group.title, group.id);
                for server in &group.servers {
                    println!("  {:<20} {} by {}", server.id, server.name, server.provider);
                    println!("  {:<20} {}", "", server.description);
                    println!("  {:<20} [{}]", "", server.tags.join(", "));
                }
                println!();
            }
            ExitCode::SUCCESS
        }
        Command::Show { id } => match catalog::find_server(&id) {
            Some(server) => {
                println!("{} ({})", server.name, server.id);
                println!("  provider: {}", server.provider);
                println!("  category: {}", server.category.title());
                println!("  tags:     {}", server.tags.join(", "));
                println!("  {}", server.description);
                ExitCode::SUCCESS
            }
            None => {
                eprintln!("No server with id {:?}. Run 'mcp-directory list' to see all ids.", id);
                ExitCode::FAILURE
            }
        },
        Command::Categories => {
            for category in catalog::Category::ALL {
                println!("{:<18} {}", category.id(), category.title());
            }
            ExitCode::SUCCESS
        }
        Command::Health => with_runtime(|rt| {
            let client = SearchClient::new(&config.api_base_url);
            match rt.block_on(client.ensure_healthy()) {
                Ok(()) => {
                    println!("Search backend at {} is healthy", client.base_url());
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Search backend at {} is not available: {}", client.base_url(), e);
                    ExitCode::FAILURE
                }
            }
        }),
        Command::Help => {
            println!("{}", Command::help_text());
            ExitCode::SUCCESS
        }
        Command::Invalid { message } => {
            eprintln!("{}", message);
            ExitCode::from(2)
        }
    }
}

fn with_runtime(f: impl FnOnce(&tokio::runtime::Runtime) -> ExitCode) -> ExitCode {
    match tokio::runtime::Runtime::new() {
        Ok(rt) => f(&rt),
        Err(e) => {
            eprintln!("Failed to create tokio runtime: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn print_results(panel: &SearchPanel) {
    if panel.results().is_empty() {
        println!("No results to display");
        return;
    }
    for (i, result) in panel.results().iter().enumerate() {
        println!("{}. {}", i + 1, result.url);
        if !result.description.is_empty() {
            println!("   {}", result.description);
        }
        println!("   What it does:    {}", result.what_can_it_do);
        println!("   Why it's useful: {}", result.why_is_it_useful);
        println!();
    }
}
