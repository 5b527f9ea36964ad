//! # Output Sink
//!
//! Every lesson reports through a [`Sink`] instead of writing to stdout
//! directly. The binary plugs in a terminal sink; tests plug in a
//! [`Transcript`] and assert on the recorded lines.

/// Destination for the lines a lesson produces, in order.
pub trait Sink {
    fn line(&mut self, msg: &str);
}

/// A sink that keeps every line it receives.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Transcript {
    lines: Vec<String>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl Sink for Transcript {
    fn line(&mut self, msg: &str) {
        self.lines.push(msg.to_string());
    }
}
