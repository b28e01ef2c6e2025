//! Core application state and iced application implementation
//!
//! One window laid out like the directory's landing page: header, hero with
//! the search panel, the category sections, the FAQ, and the footer.

use iced::widget::{column, container, scrollable, text};
use iced::{Alignment, Element, Length, Padding, Task, Theme};

use crate::backend::api::SearchClient;
use crate::backend::types::{SearchRequest, SearchResult};
use crate::catalog;
use crate::config::Config;
use crate::error::SearchError;
use crate::faq::{Accordion, FAQ_ENTRIES};
use crate::search::SearchPanel;
use crate::ui::theme::LightTheme;
use crate::ui::{category_section, faq_section, layout, results, search_bar};

const CONTENT_MAX_WIDTH: f32 = 1200.0;

// ============================================================================
// Application State
// ============================================================================

pub struct Directory {
    config: Config,
    client: SearchClient,
    search: SearchPanel,
    faq: Accordion,
}

#[derive(Debug, Clone)]
pub enum Message {
    QueryChanged(String),
    SearchSubmitted,
    SearchCompleted(Result<Vec<SearchResult>, SearchError>),
    HealthChecked(Result<(), SearchError>),
    FaqToggled(usize),
    OpenLink(String),
}

impl Directory {
    /// Build the initial state and the startup task (the optional health probe)
    pub fn new(config: Config) -> (Self, Task<Message>) {
        let client = SearchClient::new(&config.api_base_url);

        let startup = if config.check_health && config.show_search {
            let probe = client.clone();
            Task::perform(
                async move { probe.ensure_healthy().await },
                Message::HealthChecked,
            )
        } else {
            Task::none()
        };

        let app = Self {
            config,
            client,
            search: SearchPanel::new(),
            faq: Accordion::new(FAQ_ENTRIES.len()),
        };
        (app, startup)
    }

    pub fn title(&self) -> String {
        String::from("MCP Directory | Find the best MCP servers for your AI agents")
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::QueryChanged(query) => {
                self.search.set_query(query);
                Task::none()
            }

            Message::SearchSubmitted => match self.search.submit() {
                Some(request) => self.run_search(request),
                None => Task::none(),
            },

            Message::SearchCompleted(outcome) => {
                match &outcome {
                    Ok(results) => tracing::info!("Search returned {} results", results.len()),
                    Err(SearchError::Status { status, message }) => {
                        tracing::warn!("Search failed with HTTP {}: {}", status, message)
                    }
                    Err(e) => tracing::warn!("Search failed: {}", e),
                }
                self.search.finish(outcome);
                Task::none()
            }

            Message::HealthChecked(result) => {
                match result {
                    Ok(()) => {
                        tracing::info!("Search backend at {} is healthy", self.client.base_url());
                        self.search.set_backend_available(true);
                    }
                    Err(e) => {
                        tracing::warn!("Backend health check failed: {}", e);
                        self.search.set_backend_available(false);
                    }
                }
                Task::none()
            }

            Message::FaqToggled(index) => {
                self.faq.toggle(index);
                Task::none()
            }

            Message::OpenLink(url) => {
                open_link(&url);
                Task::none()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let search = self.config.show_search.then(|| self.view_search());

        let mut page = column![layout::header(), layout::hero(search)].spacing(24);

        for group in catalog::categories() {
            page = page.push(category_section::view(group));
        }

        page = page
            .push(faq_section::view(&FAQ_ENTRIES, &self.faq))
            .push(layout::footer());

        let content = container(page.max_width(CONTENT_MAX_WIDTH))
            .padding(Padding::from([0.0, 32.0]))
            .center_x(Length::Fill);

        container(scrollable(content).height(Length::Fill))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(crate::ui::theme::page)
            .into()
    }

    pub fn theme(&self) -> Theme {
        Theme::Light
    }

    // ========================================================================
    // Search
    // ========================================================================

    fn run_search(&self, request: SearchRequest) -> Task<Message> {
        tracing::info!("Searching for {:?}", request.query);
        let client = self.client.clone();
        Task::perform(
            async move { client.search(&request).await },
            Message::SearchCompleted,
        )
    }

    fn view_search(&self) -> Element<'_, Message> {
        if !self.search.backend_available() {
            return layout::backend_unavailable();
        }

        let on_submit = self.search.can_submit().then_some(Message::SearchSubmitted);
        let mut panel = column![search_bar::view(
            self.search.query(),
            self.search.is_loading(),
            Message::QueryChanged,
            on_submit,
        )]
        .spacing(16)
        .align_x(Alignment::Center)
        .max_width(900);

        if self.search.is_loading() {
            panel = panel.push(text("Searching...").size(14).color(LightTheme::TEXT_MUTED));
        }

        if !self.search.error().is_empty() {
            panel = panel.push(layout::error_banner(self.search.error()));
        }

        panel.push(results::view(self.search.results())).into()
    }
}

/// Open a result link in the system browser; anything that is not http(s)
/// is refused.
fn open_link(url: &str) {
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        tracing::warn!("Refusing to open non-http link {:?}", url);
        return;
    }
    if let Err(e) = open::that(url) {
        tracing::warn!("Failed to open {}: {}", url, e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> Directory {
        let config = Config {
            api_base_url: "http://127.0.0.1:9/api".to_string(),
            ..Config::default()
        };
        Directory::new(config).0
    }

    #[test]
    fn test_submit_then_complete() {
        let mut app = app();
        let _ = app.update(Message::QueryChanged("web search".to_string()));
        let _ = app.update(Message::SearchSubmitted);
        assert!(app.search.is_loading());

        let _ = app.update(Message::SearchCompleted(Ok(vec![SearchResult {
            url: "https://example.com".to_string(),
            ..Default::default()
        }])));
        assert!(!app.search.is_loading());
        assert_eq!(app.search.results().len(), 1);
        assert_eq!(app.search.error(), "");
    }

    #[test]
    fn test_second_submit_while_loading_keeps_state() {
        let mut app = app();
        let _ = app.update(Message::QueryChanged("one".to_string()));
        let _ = app.update(Message::SearchSubmitted);
        let before = app.search.clone();

        let _ = app.update(Message::SearchSubmitted);
        assert_eq!(app.search, before);
        assert!(!app.search.can_submit());
    }

    #[test]
    fn test_failure_message_is_shown() {
        let mut app = app();
        let _ = app.update(Message::SearchSubmitted);
        let _ = app.update(Message::SearchCompleted(Err(SearchError::Status {
            status: 500,
            message: "boom".to_string(),
        })));
        assert_eq!(app.search.error(), "boom");
        assert!(!app.search.is_loading());
    }

    #[test]
    fn test_failed_health_check_disables_search() {
        let mut app = app();
        let _ = app.update(Message::HealthChecked(Err(SearchError::Transport(
            "connection refused".to_string(),
        ))));
        assert!(!app.search.backend_available());

        let _ = app.update(Message::SearchSubmitted);
        assert!(!app.search.is_loading());
        assert_eq!(app.search.error(), SearchError::Unavailable.to_string());
    }

    #[test]
    fn test_faq_toggle_messages() {
        let mut app = app();
        let _ = app.update(Message::FaqToggled(2));
        let _ = app.update(Message::FaqToggled(4));
        assert_eq!(app.faq.open_index(), Some(4));
        let _ = app.update(Message::FaqToggled(4));
        assert_eq!(app.faq.open_index(), None);
    }
}
