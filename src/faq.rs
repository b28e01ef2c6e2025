//! FAQ content and single-expand accordion state

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQ_ENTRIES: [FaqEntry; 7] = [
    FaqEntry {
        question: "What is MCP (Model Context Protocol)?",
        answer: "MCP is an open-source protocol developed by Anthropic that enables AI systems like Claude to securely connect with various data sources. It provides a universal standard for AI assistants to access external data, tools, and prompts through a client-server architecture.",
    },
    FaqEntry {
        question: "What are MCP Servers?",
        answer: "MCP Servers are systems that provide context, tools, and prompts to AI clients. They can expose data sources like files, documents, databases, and API integrations, allowing AI assistants to access real-time information in a secure way.",
    },
    FaqEntry {
        question: "How do MCP Servers work?",
        answer: "MCP Servers work through a simple client-server architecture. They expose data and tools through a standardized protocol, maintaining secure 1:1 connections with clients inside host applications like Claude Desktop.",
    },
    FaqEntry {
        question: "What can MCP Servers provide?",
        answer: "MCP Servers can share resources (files, docs, data), expose tools (API integrations, actions), and provide prompts (templated interactions). They control their own resources and maintain clear system boundaries for security.",
    },
    FaqEntry {
        question: "How does Claude use MCP?",
        answer: "Claude can connect to MCP servers to access external data sources and tools, enhancing its capabilities with real-time information. Currently, this works with local MCP servers, with enterprise remote server support coming soon.",
    },
    FaqEntry {
        question: "Are MCP Servers secure?",
        answer: "Yes, security is built into the MCP protocol. Servers control their own resources, there's no need to share API keys with LLM providers, and the system maintains clear boundaries. Each server manages its own authentication and access control.",
    },
    FaqEntry {
        question: "What is MCP Directory?",
        answer: "MCP Directory is a community-driven platform that collects and organizes third-party MCP Servers. It serves as a central directory where users can discover, share, and learn about various MCP Servers available for AI applications.",
    },
];

/// Collapsible accordion where at most one item is open
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Accordion {
    open: Option<usize>,
    len: usize,
}

impl Accordion {
    pub fn new(len: usize) -> Self {
        Self { open: None, len }
    }

    pub fn open_index(&self) -> Option<usize> {
        self.open
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open_index() == Some(index)
    }

    /// Open `index`, or close it if it is already open
    pub fn toggle(&mut self, index: usize) {
        if index >= self.len {
            tracing::debug!("Ignoring toggle of accordion item {} (len {})", index, self.len);
            return;
        }
        self.open = if self.open == Some(index) { None } else { Some(index) };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opening_second_item_closes_first() {
        let mut accordion = Accordion::new(FAQ_ENTRIES.len());
        accordion.toggle(2);
        accordion.toggle(4);
        assert_eq!(accordion.open_index(), Some(4));
        assert!(!accordion.is_open(2));

        accordion.toggle(4);
        assert_eq!(accordion.open_index(), None);
    }

    #[test]
    fn test_out_of_range_toggle_is_ignored() {
        let mut accordion = Accordion::new(3);
        accordion.toggle(1);
        accordion.toggle(7);
        assert_eq!(accordion.open_index(), Some(1));
    }

    #[test]
    fn test_starts_closed() {
        let accordion = Accordion::new(FAQ_ENTRIES.len());
        assert!((0..FAQ_ENTRIES.len()).all(|i| !accordion.is_open(i)));
    }
}
