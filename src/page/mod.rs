//! # Pages
//!
//! A [`Page`] holds the lines printed between two form feeds: an optional
//! header, the content, and an optional footer.
//!
//! ## Line Addressing
//!
//! Lines are numbered from 1 across the three regions in print order:
//!
//! ```text
//! 1 ..= H              header
//! H+1 ..= H+C          content
//! H+C+1 ..= H+C+F      footer
//! ```
//!
//! ## Capacity
//!
//! A page with a page length never holds more than that many lines, header
//! and footer included. Operations that would overflow fail and leave the
//! page as it was.
//!
//! ```
//! use estampa::page::Page;
//!
//! let mut page = Page::new(Vec::new(), vec!["HEADER".into()], Vec::new(), Some(1), Some(3))?;
//! page.append("first")?;
//! page.append("second")?;
//! assert!(page.is_full());
//! assert!(page.append("third").is_err());
//! assert_eq!(page.render(false, false), "HEADER\r\nfirst\r\nsecond\r\n");
//! # Ok::<(), estampa::EstampaError>(())
//! ```

mod line;

pub use line::{Line, TextLine};

use crate::EstampaError;
use crate::protocol::commands::{CR_STR, CRFF_STR, CRLF_STR};

/// One printed page.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Page {
    header: Vec<Line>,
    footer: Vec<Line>,
    content: Vec<Line>,
    page_number: Option<usize>,
    page_length: Option<usize>,
}

impl Page {
    /// Create a page.
    ///
    /// `page_number` starts at 1 for the first page of a document.
    /// `page_length` caps the total number of lines; `None` means unlimited.
    ///
    /// # Errors
    ///
    /// - `Validation` if `page_number` or `page_length` is zero
    /// - `Capacity` if the lines already exceed `page_length`
    pub fn new(
        content: Vec<Line>,
        header: Vec<Line>,
        footer: Vec<Line>,
        page_number: Option<usize>,
        page_length: Option<usize>,
    ) -> Result<Self, EstampaError> {
        if page_number == Some(0) {
            return Err(EstampaError::Validation(
                "Page numbers start at 1".to_string(),
            ));
        }
        if page_length == Some(0) {
            return Err(EstampaError::Validation(
                "Page length must be at least 1 line".to_string(),
            ));
        }

        let mut page = Self {
            header,
            footer,
            content: Vec::new(),
            page_number,
            page_length,
        };
        if let Some(max) = page_length
            && page.header.len() + page.footer.len() > max
        {
            return Err(EstampaError::Capacity(format!(
                "Header and footer need {} lines but the page length is {}",
                page.header.len() + page.footer.len(),
                max
            )));
        }

        page.set_content(content)?;
        Ok(page)
    }

    pub fn header(&self) -> &[Line] {
        &self.header
    }

    pub fn footer(&self) -> &[Line] {
        &self.footer
    }

    pub fn content(&self) -> &[Line] {
        &self.content
    }

    /// Replace the content of this page.
    ///
    /// # Errors
    ///
    /// `Capacity` if header, footer and the new content together exceed the
    /// page length. The current content is kept in that case.
    pub fn set_content(&mut self, content: Vec<Line>) -> Result<(), EstampaError> {
        if let Some(max) = self.page_length {
            let total = self.header.len() + self.footer.len() + content.len();
            if total > max {
                return Err(EstampaError::Capacity(format!(
                    "Page overflow: {} lines do not fit in a page of {} lines",
                    total, max
                )));
            }
        }
        self.content = content;
        Ok(())
    }

    pub fn page_number(&self) -> Option<usize> {
        self.page_number
    }

    /// Assign a new page number, e.g. when a document renumbers its pages.
    ///
    /// # Errors
    ///
    /// `Validation` if `page_number` is zero.
    pub fn set_page_number(&mut self, page_number: usize) -> Result<(), EstampaError> {
        if page_number == 0 {
            return Err(EstampaError::Validation(
                "Page numbers start at 1".to_string(),
            ));
        }
        self.page_number = Some(page_number);
        Ok(())
    }

    pub fn page_length(&self) -> Option<usize> {
        self.page_length
    }

    /// Whether no further line can be appended.
    pub fn is_full(&self) -> bool {
        match self.page_length {
            Some(max) => self.number_of_lines() >= max,
            None => false,
        }
    }

    /// Append a line after the last content line.
    ///
    /// Accepts a [`Line`], a [`TextLine`] or plain text.
    ///
    /// # Errors
    ///
    /// `Capacity` if the page is full.
    pub fn append(&mut self, line: impl Into<Line>) -> Result<(), EstampaError> {
        if self.is_full() {
            return Err(EstampaError::Capacity(format!(
                "Page {} is full",
                self.page_number.map_or_else(|| "-".to_string(), |n| n.to_string())
            )));
        }
        self.content.push(line.into());
        Ok(())
    }

    /// Lines written so far, header and footer included.
    pub fn number_of_lines(&self) -> usize {
        self.header.len() + self.content.len() + self.footer.len()
    }

    /// Line at a 1-based position across header, content and footer.
    ///
    /// # Errors
    ///
    /// `Range` if `line_number` is 0 or past the last line.
    pub fn get(&self, line_number: usize) -> Result<&Line, EstampaError> {
        if line_number == 0 || line_number > self.number_of_lines() {
            return Err(EstampaError::Range {
                line_number,
                number_of_lines: self.number_of_lines(),
            });
        }

        let mut index = line_number - 1;
        if index < self.header.len() {
            return Ok(&self.header[index]);
        }
        index -= self.header.len();
        if index < self.content.len() {
            return Ok(&self.content[index]);
        }
        index -= self.content.len();
        Ok(&self.footer[index])
    }

    /// Iterate over all lines in print order.
    pub fn iter(&self) -> impl Iterator<Item = &Line> {
        self.header
            .iter()
            .chain(self.content.iter())
            .chain(self.footer.iter())
    }

    /// Copy of all lines in print order.
    pub fn lines(&self) -> Vec<Line> {
        self.iter().cloned().collect()
    }

    /// Serialize the page for the printer.
    ///
    /// Every line is followed by CR when the printer does auto line-feed and
    /// by CR LF otherwise. With `auto_formfeed` the page ends with CR FF.
    /// Placeholders are not touched; lines must already hold final text.
    pub fn render(&self, auto_linefeed: bool, auto_formfeed: bool) -> String {
        let terminator = if auto_linefeed { CR_STR } else { CRLF_STR };
        let mut out = String::new();
        for line in self.iter() {
            match line {
                Line::Text(text) => {
                    out.push_str(text.text());
                    out.push_str(terminator);
                }
            }
        }
        if auto_formfeed {
            out.push_str(CRFF_STR);
        }
        out
    }
}

// ============================================================================
// TESTS
// ============================================================================
