//! # Reports
//!
//! A [`Report`] is a paginated document: the page format plus the pages cut
//! from a list of already-resolved lines. Rendering it yields the complete
//! printer payload:
//!
//! ```text
//! [ESC @ + format commands] [page 1] [page 2] ...
//! ```
//!
//! ## Pagination
//!
//! Each page repeats the header and footer. The content capacity of a page
//! is `pageLength - header - footer`; without a page length everything goes
//! on a single page. Header and footer lines are filled once per page, with
//! the report's values plus the reserved `${pageNumber}`, which always holds
//! the 1-based page number.
//!
//! ```
//! use estampa::protocol::format::PageFormat;
//! use estampa::report::Report;
//!
//! let detail: Vec<String> = (1..=5).map(|i| format!("item {}", i)).collect();
//! let report = Report::paginate(
//!     PageFormat::new().page_length(4),
//!     vec!["Page ${pageNumber}".to_string()],
//!     detail,
//!     Vec::new(),
//! )?;
//!
//! assert_eq!(report.pages().len(), 2);
//! assert_eq!(report.pages()[1].get(1)?.render(), "Page 2");
//! # Ok::<(), estampa::EstampaError>(())
//! ```

use std::collections::HashMap;

use rayon::prelude::*;

use crate::EstampaError;
use crate::page::{Line, Page};
use crate::protocol::format::PageFormat;
use crate::template::interpolate;

/// Placeholder replaced with the page number in headers and footers.
pub const PAGE_NUMBER: &str = "pageNumber";

/// A paginated document ready to print.
#[derive(Debug, Clone)]
pub struct Report {
    format: PageFormat,
    header: Vec<String>,
    footer: Vec<String>,
    values: HashMap<String, String>,
    pages: Vec<Page>,
}

impl Report {
    /// Cut `detail` into pages.
    ///
    /// Always produces at least one page, even for empty detail.
    ///
    /// # Errors
    ///
    /// `Capacity` if the format's page length leaves no room for content
    /// once header and footer are placed.
    pub fn paginate(
        format: PageFormat,
        header: Vec<String>,
        detail: Vec<String>,
        footer: Vec<String>,
    ) -> Result<Self, EstampaError> {
        Self::paginate_with_values(format, header, detail, footer, HashMap::new())
    }

    /// Like [`Report::paginate`], filling header and footer with `values`.
    ///
    /// `detail` is taken as already filled. A `pageNumber` entry in `values`
    /// is ignored.
    ///
    /// # Errors
    ///
    /// `Capacity` as for [`Report::paginate`].
    pub fn paginate_with_values(
        format: PageFormat,
        header: Vec<String>,
        detail: Vec<String>,
        footer: Vec<String>,
        values: HashMap<String, String>,
    ) -> Result<Self, EstampaError> {
        let page_length = format.page_length.map(usize::from);
        if let Some(max) = page_length
            && header.len() + footer.len() >= max
        {
            return Err(EstampaError::Capacity(format!(
                "Page length {} leaves no room for content after {} header and {} footer lines",
                max,
                header.len(),
                footer.len()
            )));
        }

        let mut report = Self {
            format,
            header,
            footer,
            values,
            pages: Vec::new(),
        };

        let mut lines = detail.into_iter().peekable();
        loop {
            let mut page = report.blank_page(report.pages.len() + 1, page_length)?;
            while !page.is_full() {
                match lines.next() {
                    Some(line) => page.append(line)?,
                    None => break,
                }
            }
            report.pages.push(page);
            if lines.peek().is_none() {
                break;
            }
        }

        log::debug!(
            "paginated report into {} page(s) of {} lines",
            report.pages.len(),
            page_length.map_or_else(|| "unlimited".to_string(), |n| n.to_string())
        );
        Ok(report)
    }

    /// Empty page carrying header and footer for `number`.
    fn blank_page(&self, number: usize, page_length: Option<usize>) -> Result<Page, EstampaError> {
        let mut values = self.values.clone();
        values.insert(PAGE_NUMBER.to_string(), number.to_string());
        let fill = |lines: &[String]| -> Vec<Line> {
            lines
                .iter()
                .map(|line| Line::from(interpolate(line, &values)))
                .collect()
        };
        Page::new(
            Vec::new(),
            fill(&self.header),
            fill(&self.footer),
            Some(number),
            page_length,
        )
    }

    pub fn format(&self) -> &PageFormat {
        &self.format
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    /// Page by 1-based page number.
    pub fn page_mut(&mut self, number: usize) -> Option<&mut Page> {
        number
            .checked_sub(1)
            .and_then(|index| self.pages.get_mut(index))
    }

    /// Remove a page by 1-based page number and renumber the rest.
    ///
    /// # Errors
    ///
    /// `Capacity` only if renumbering fails, which cannot happen for pages
    /// built by `paginate`.
    pub fn remove_page(&mut self, number: usize) -> Result<Option<Page>, EstampaError> {
        if number == 0 || number > self.pages.len() {
            return Ok(None);
        }
        let page = self.pages.remove(number - 1);
        self.renumber()?;
        Ok(Some(page))
    }

    /// Number pages 1..n in their current order.
    ///
    /// Headers and footers are rebuilt so `${pageNumber}` shows the new
    /// number; content is kept.
    ///
    /// # Errors
    ///
    /// `Capacity` if a page's content no longer fits with the rebuilt header
    /// and footer. The report is left unchanged on error.
    pub fn renumber(&mut self) -> Result<(), EstampaError> {
        let mut renumbered = Vec::with_capacity(self.pages.len());
        for (index, old) in self.pages.iter().enumerate() {
            let mut page = self.blank_page(index + 1, old.page_length())?;
            page.set_content(old.content().to_vec())?;
            renumbered.push(page);
        }
        self.pages = renumbered;
        Ok(())
    }

    /// Build the printer payload: format prefix followed by every page.
    ///
    /// Pages are rendered in parallel and concatenated in order.
    ///
    /// # Errors
    ///
    /// `Validation` if the page format is inconsistent.
    pub fn render(&self) -> Result<Vec<u8>, EstampaError> {
        let mut out = self.format.build()?;
        let auto_line_feed = self.format.auto_line_feed;
        let auto_form_feed = self.format.auto_form_feed;

        let rendered: Vec<String> = self
            .pages
            .par_iter()
            .map(|page| page.render(auto_line_feed, auto_form_feed))
            .collect();
        for text in rendered {
            out.extend_from_slice(text.as_bytes());
        }

        log::debug!("rendered {} page(s), {} bytes", self.pages.len(), out.len());
        Ok(out)
    }
}

// ============================================================================
// TESTS
// ============================================================================
