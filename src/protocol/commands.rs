//! # ESC/P Protocol Commands
//!
//! This module implements the subset of the Epson ESC/P command protocol
//! used to set up a page on 9-pin and 24-pin dot-matrix printers
//! (LX-300, FX-890, LQ-2190 and compatibles).
//!
//! ## Protocol Overview
//!
//! ESC/P mixes plain text with control sequences. Text bytes are printed as
//! they arrive; control bytes move the print head or the paper, and escape
//! sequences change the printer state:
//!
//! - **Control codes**: `CR`, `LF`, `FF`
//! - **Two bytes**: `ESC @`, `ESC 0`, `ESC 2`
//! - **Three bytes with one parameter**: `ESC C n`, `ESC l n`, `ESC Q n`
//!
//! Every parameter used here is a single unsigned byte, so counts are in the
//! range 0-255.
//!
//! ## Reference
//!
//! Based on "ESC/P Reference Manual" by Seiko Epson Corporation.

// ============================================================================
// CONTROL CODES
// ============================================================================

/// ESC (Escape) - Command prefix byte
pub const ESC: u8 = 0x1B;

/// CR (Carriage Return) - Move the print head to the left margin
///
/// With auto line-feed enabled on the printer (DIP switch or panel setting),
/// CR also advances the paper one line.
pub const CR: u8 = 0x0D;

/// LF (Line Feed) - Advance the paper one line
pub const LF: u8 = 0x0A;

/// FF (Form Feed) - Advance the paper to the top of the next page
///
/// The page length set with `ESC C` (or the printer default) decides how far
/// the paper moves.
pub const FF: u8 = 0x0C;

/// Line terminator when the printer performs auto line-feed.
pub const CR_STR: &str = "\r";

/// Line terminator when the printer does not perform auto line-feed.
pub const CRLF_STR: &str = "\r\n";

/// End-of-page sequence: return the head, then eject the page.
pub const CRFF_STR: &str = "\r\x0c";

// ============================================================================
// INITIALIZATION
// ============================================================================

/// # Initialize Printer (ESC @)
///
/// Resets the printer to its power-on state. Every payload starts with it so
/// the settings that follow are applied to a known baseline.
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC @ |
/// | Hex     | 1B 40 |
/// | Decimal | 27 64 |
///
/// ## What Gets Reset
///
/// - Line spacing returns to 1/6 inch
/// - Margins are cancelled
/// - Page length returns to the panel setting
/// - Character pitch and typeface return to the panel setting
///
/// The print buffer is cleared but data already on the page is kept.
///
/// ## Example
///
/// ```
/// use estampa::protocol::commands;
///
/// assert_eq!(commands::init(), vec![0x1B, 0x40]);
/// ```
#[inline]
pub fn init() -> Vec<u8> {
    vec![ESC, b'@']
}

// ============================================================================
// LINE SPACING
// ============================================================================

/// # Select 1/8-inch Line Spacing (ESC 0)
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC 0 |
/// | Hex     | 1B 30 |
/// | Decimal | 27 48 |
///
/// Eight lines per inch: 88 lines on an 11-inch form.
#[inline]
pub fn line_spacing_1_8() -> Vec<u8> {
    vec![ESC, b'0']
}

/// # Select 7/72-inch Line Spacing (ESC 1)
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC 1 |
/// | Hex     | 1B 31 |
/// | Decimal | 27 49 |
///
/// Available on 9-pin printers only; 24-pin printers ignore it.
#[inline]
pub fn line_spacing_7_72() -> Vec<u8> {
    vec![ESC, b'1']
}

/// # Select 1/6-inch Line Spacing (ESC 2)
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC 2 |
/// | Hex     | 1B 32 |
/// | Decimal | 27 50 |
///
/// Six lines per inch, the power-on default: 66 lines on an 11-inch form.
#[inline]
pub fn line_spacing_1_6() -> Vec<u8> {
    vec![ESC, b'2']
}

// ============================================================================
// CHARACTER SELECTION
// ============================================================================

/// Master select bit: 12 cpi (elite) instead of 10 cpi (pica)
pub const MASTER_ELITE: u8 = 1;

/// Master select bit: proportional spacing
pub const MASTER_PROPORTIONAL: u8 = 2;

/// Master select bit: condensed printing
pub const MASTER_CONDENSED: u8 = 4;

/// Master select bit: emphasized (bold) printing
pub const MASTER_EMPHASIZED: u8 = 8;

/// Master select bit: double-strike printing
pub const MASTER_DOUBLE_STRIKE: u8 = 16;

/// Master select bit: double-width printing
pub const MASTER_DOUBLE_WIDTH: u8 = 32;

/// # Master Select (ESC ! n)
///
/// Selects pitch and print mode in one command. `n` is a bit field built
/// from the `MASTER_*` constants.
///
/// ## Protocol Details
///
/// | Format  | Bytes      |
/// |---------|------------|
/// | ASCII   | ESC ! n    |
/// | Hex     | 1B 21 n    |
/// | Decimal | 27 33 n    |
///
/// ## Resulting Pitch
///
/// | Bits | Pitch |
/// |------|-------|
/// | 0 | 10 cpi |
/// | ELITE | 12 cpi |
/// | CONDENSED | 17.14 cpi |
/// | ELITE + CONDENSED | 20 cpi |
/// | DOUBLE_WIDTH | 5 cpi |
/// | ELITE + DOUBLE_WIDTH | 6 cpi |
///
/// ## Example
///
/// ```
/// use estampa::protocol::commands::{self, MASTER_CONDENSED};
///
/// assert_eq!(commands::master_select(MASTER_CONDENSED), vec![0x1B, 0x21, 0x04]);
/// ```
#[inline]
pub fn master_select(n: u8) -> Vec<u8> {
    vec![ESC, b'!', n]
}

/// # Select Typeface (ESC k n)
///
/// | Format  | Bytes    |
/// |---------|----------|
/// | ASCII   | ESC k n  |
/// | Hex     | 1B 6B n  |
/// | Decimal | 27 107 n |
///
/// Selects the letter-quality typeface. Printers without the requested
/// typeface keep the current one.
#[inline]
pub fn typeface(n: u8) -> Vec<u8> {
    vec![ESC, b'k', n]
}

// ============================================================================
// PAGE FORMAT
// ============================================================================

/// # Set Page Length in Lines (ESC C n)
///
/// | Format  | Bytes   |
/// |---------|---------|
/// | ASCII   | ESC C n |
/// | Hex     | 1B 43 n |
/// | Decimal | 27 67 n |
///
/// Sets the page length to `n` lines at the current line spacing. Sets the
/// top-of-form to the current position and cancels the bottom margin.
#[inline]
pub fn page_length_lines(n: u8) -> Vec<u8> {
    vec![ESC, b'C', n]
}

/// # Set Left Margin (ESC l n)
///
/// | Format  | Bytes    |
/// |---------|----------|
/// | ASCII   | ESC l n  |
/// | Hex     | 1B 6C n  |
/// | Decimal | 27 108 n |
///
/// `n` is measured in columns of the current pitch from the left-most
/// printable position.
#[inline]
pub fn left_margin(n: u8) -> Vec<u8> {
    vec![ESC, b'l', n]
}

/// # Set Right Margin (ESC Q n)
///
/// | Format  | Bytes   |
/// |---------|---------|
/// | ASCII   | ESC Q n |
/// | Hex     | 1B 51 n |
/// | Decimal | 27 81 n |
///
/// `n` is the right boundary, in columns of the current pitch counted from
/// the left edge. It is an absolute position, not a distance from the right
/// side of the paper, so it also serves to set the usable page width.
#[inline]
pub fn right_margin(n: u8) -> Vec<u8> {
    vec![ESC, b'Q', n]
}

/// # Set Bottom Margin (ESC N n)
///
/// | Format  | Bytes   |
/// |---------|---------|
/// | ASCII   | ESC N n |
/// | Hex     | 1B 4E n |
/// | Decimal | 27 78 n |
///
/// Skips `n` lines over the perforation of continuous paper.
#[inline]
pub fn bottom_margin(n: u8) -> Vec<u8> {
    vec![ESC, b'N', n]
}

// ============================================================================
// TESTS
// ============================================================================
