//! # Page Format Builder
//!
//! `PageFormat` collects the optional page settings of a document and turns
//! them into the ESC/P prefix sent ahead of the first page.
//!
//! ## Emission Order
//!
//! The prefix always starts with `ESC @`. Each setting that was explicitly
//! set then contributes one command, in this fixed order:
//!
//! | # | Setting | Command | Parameter |
//! |---|---------|---------|-----------|
//! | 1 | line spacing | `ESC 0` / `ESC 1` / `ESC 2` | - |
//! | 2 | character pitch | `ESC ! n` | master select bits |
//! | 3 | page length | `ESC C n` | lines (skipped when using the printer's page length) |
//! | 4 | page width | `ESC Q n` | columns (skipped when a right margin is set) |
//! | 5 | left margin | `ESC l n` | columns |
//! | 6 | right margin | `ESC Q n` | page width - right margin |
//! | 7 | bottom margin | `ESC N n` | lines |
//! | 8 | typeface | `ESC k n` | typeface code |
//!
//! Page width and right margin both program the right boundary register, so
//! only one of them is ever emitted.
//!
//! ## Example
//!
//! ```
//! use estampa::protocol::format::{PageFormat, Typeface};
//!
//! let prefix = PageFormat::new()
//!     .page_width(80)
//!     .left_margin(5)
//!     .right_margin(10)
//!     .typeface(Typeface::Roman)
//!     .build()?;
//!
//! assert_eq!(
//!     prefix,
//!     vec![0x1B, b'@', 0x1B, b'l', 5, 0x1B, b'Q', 70, 0x1B, b'k', 0]
//! );
//! # Ok::<(), estampa::EstampaError>(())
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::commands::{self, MASTER_CONDENSED, MASTER_DOUBLE_WIDTH, MASTER_ELITE};
use crate::EstampaError;

// ============================================================================
// LINE SPACING
// ============================================================================

/// Line spacings selectable with a single ESC/P command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum LineSpacing {
    /// 1/8 inch (`"1/8"`)
    EighthInch,
    /// 7/72 inch (`"7/72"`)
    SevenSeventySecondsInch,
    /// 1/6 inch (`"1/6"`), the printer default
    SixthInch,
}

impl LineSpacing {
    /// Command bytes selecting this spacing.
    pub fn command(self) -> Vec<u8> {
        match self {
            Self::EighthInch => commands::line_spacing_1_8(),
            Self::SevenSeventySecondsInch => commands::line_spacing_7_72(),
            Self::SixthInch => commands::line_spacing_1_6(),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::EighthInch => "1/8",
            Self::SevenSeventySecondsInch => "7/72",
            Self::SixthInch => "1/6",
        }
    }
}

impl FromStr for LineSpacing {
    type Err = EstampaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1/8" => Ok(Self::EighthInch),
            "7/72" => Ok(Self::SevenSeventySecondsInch),
            "1/6" => Ok(Self::SixthInch),
            other => Err(EstampaError::Validation(format!(
                "Unknown line spacing '{}'. Use '1/8', '7/72' or '1/6'",
                other
            ))),
        }
    }
}

// ============================================================================
// CHARACTER PITCH
// ============================================================================

/// Character pitches reachable through master select (`ESC !`).
///
/// Named after characters per inch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SettingValue", into = "String")]
pub enum CharacterPitch {
    Cpi5,
    Cpi6,
    Cpi10,
    Cpi12,
    Cpi17,
    Cpi20,
}

impl CharacterPitch {
    /// Master select bit field for this pitch.
    pub fn master_select_bits(self) -> u8 {
        match self {
            Self::Cpi5 => MASTER_DOUBLE_WIDTH,
            Self::Cpi6 => MASTER_ELITE | MASTER_DOUBLE_WIDTH,
            Self::Cpi10 => 0,
            Self::Cpi12 => MASTER_ELITE,
            Self::Cpi17 => MASTER_CONDENSED,
            Self::Cpi20 => MASTER_ELITE | MASTER_CONDENSED,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cpi5 => "5",
            Self::Cpi6 => "6",
            Self::Cpi10 => "10",
            Self::Cpi12 => "12",
            Self::Cpi17 => "17",
            Self::Cpi20 => "20",
        }
    }
}

impl FromStr for CharacterPitch {
    type Err = EstampaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "5" => Ok(Self::Cpi5),
            "6" => Ok(Self::Cpi6),
            "10" => Ok(Self::Cpi10),
            "12" => Ok(Self::Cpi12),
            "17" => Ok(Self::Cpi17),
            "20" => Ok(Self::Cpi20),
            other => Err(EstampaError::Validation(format!(
                "Unknown character pitch '{}'. Use 5, 6, 10, 12, 17 or 20",
                other
            ))),
        }
    }
}

// ============================================================================
// TYPEFACE
// ============================================================================

/// ESC/P typefaces selectable with `ESC k n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
#[repr(u8)]
pub enum Typeface {
    Roman = 0,
    SansSerif = 1,
    Courier = 2,
    Prestige = 3,
    Script = 4,
    OcrB = 5,
    OcrA = 6,
    Orator = 7,
    OratorS = 8,
    ScriptC = 9,
    RomanT = 10,
    SansSerifH = 11,
}

/// (name, typeface) pairs accepted by `Typeface::from_str`.
const TYPEFACE_NAMES: &[(&str, Typeface)] = &[
    ("roman", Typeface::Roman),
    ("sans-serif", Typeface::SansSerif),
    ("courier", Typeface::Courier),
    ("prestige", Typeface::Prestige),
    ("script", Typeface::Script),
    ("ocr-b", Typeface::OcrB),
    ("ocr-a", Typeface::OcrA),
    ("orator", Typeface::Orator),
    ("orator-s", Typeface::OratorS),
    ("script-c", Typeface::ScriptC),
    ("roman-t", Typeface::RomanT),
    ("sans-serif-h", Typeface::SansSerifH),
];

impl Typeface {
    /// Typeface code sent as the `ESC k` parameter.
    #[inline]
    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Roman => "roman",
            Self::SansSerif => "sans-serif",
            Self::Courier => "courier",
            Self::Prestige => "prestige",
            Self::Script => "script",
            Self::OcrB => "ocr-b",
            Self::OcrA => "ocr-a",
            Self::Orator => "orator",
            Self::OratorS => "orator-s",
            Self::ScriptC => "script-c",
            Self::RomanT => "roman-t",
            Self::SansSerifH => "sans-serif-h",
        }
    }
}

impl FromStr for Typeface {
    type Err = EstampaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        TYPEFACE_NAMES
            .iter()
            .find(|(name, _)| *name == lower)
            .map(|(_, t)| *t)
            .ok_or_else(|| EstampaError::Validation(format!("Unknown typeface '{}'", s)))
    }
}

// ============================================================================
// SERDE GLUE
// ============================================================================

/// A setting written either as a JSON string or a bare number.
#[derive(Deserialize)]
#[serde(untagged)]
enum SettingValue {
    Text(String),
    Number(u64),
}

impl TryFrom<SettingValue> for CharacterPitch {
    type Error = EstampaError;

    fn try_from(value: SettingValue) -> Result<Self, Self::Error> {
        match value {
            SettingValue::Text(s) => s.parse(),
            SettingValue::Number(n) => n.to_string().parse(),
        }
    }
}

macro_rules! string_setting {
    ($ty:ty) => {
        impl TryFrom<String> for $ty {
            type Error = EstampaError;

            fn try_from(s: String) -> Result<Self, Self::Error> {
                s.parse()
            }
        }

        impl From<$ty> for String {
            fn from(value: $ty) -> String {
                value.as_str().to_string()
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

string_setting!(LineSpacing);
string_setting!(Typeface);

impl From<CharacterPitch> for String {
    fn from(value: CharacterPitch) -> String {
        value.as_str().to_string()
    }
}

impl fmt::Display for CharacterPitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// PAGE FORMAT
// ============================================================================

/// Page settings of a document.
///
/// Every setting is optional; only the ones that are set produce commands.
/// The rendering flags (`auto_line_feed`, `auto_form_feed`) do not produce
/// commands, they decide how pages terminate their lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawPageFormat")]
pub struct PageFormat {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_spacing: Option<LineSpacing>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub character_pitch: Option<CharacterPitch>,
    /// Lines per page. Also the pagination capacity of a report.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_length: Option<u8>,
    /// Keep the printer's own page length instead of sending `ESC C`.
    pub use_printer_page_length: bool,
    /// Usable width in columns.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_width: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left_margin: Option<u8>,
    /// Columns kept free on the right, measured from `page_width`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right_margin: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom_margin: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub typeface: Option<Typeface>,
    /// The printer advances the paper on CR, so lines end with CR only.
    pub auto_line_feed: bool,
    /// Eject every page with CR FF.
    pub auto_form_feed: bool,
}

/// Page format as written in JSON, before symbolic settings are validated.
///
/// Structural problems (wrong JSON types, counts outside 0-255) fail while
/// deserializing this; unknown setting names fail in the conversion to
/// `PageFormat` with `Validation`.
#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
struct RawPageFormat {
    line_spacing: Option<String>,
    character_pitch: Option<SettingValue>,
    page_length: Option<u8>,
    use_printer_page_length: bool,
    page_width: Option<u8>,
    left_margin: Option<u8>,
    right_margin: Option<u8>,
    bottom_margin: Option<u8>,
    typeface: Option<String>,
    auto_line_feed: Option<bool>,
    auto_form_feed: Option<bool>,
}

impl TryFrom<RawPageFormat> for PageFormat {
    type Error = EstampaError;

    fn try_from(raw: RawPageFormat) -> Result<Self, Self::Error> {
        let defaults = PageFormat::default();
        Ok(Self {
            line_spacing: raw.line_spacing.as_deref().map(str::parse::<LineSpacing>).transpose()?,
            character_pitch: raw.character_pitch.map(CharacterPitch::try_from).transpose()?,
            page_length: raw.page_length,
            use_printer_page_length: raw.use_printer_page_length,
            page_width: raw.page_width,
            left_margin: raw.left_margin,
            right_margin: raw.right_margin,
            bottom_margin: raw.bottom_margin,
            typeface: raw.typeface.as_deref().map(str::parse::<Typeface>).transpose()?,
            auto_line_feed: raw.auto_line_feed.unwrap_or(defaults.auto_line_feed),
            auto_form_feed: raw.auto_form_feed.unwrap_or(defaults.auto_form_feed),
        })
    }
}

impl Default for PageFormat {
    fn default() -> Self {
        Self {
            line_spacing: None,
            character_pitch: None,
            page_length: None,
            use_printer_page_length: false,
            page_width: None,
            left_margin: None,
            right_margin: None,
            bottom_margin: None,
            typeface: None,
            auto_line_feed: false,
            auto_form_feed: true,
        }
    }
}

/// One entry of the emission table: when it applies and how it encodes.
struct FormatCommand {
    name: &'static str,
    is_set: fn(&PageFormat) -> bool,
    encode: fn(&PageFormat) -> Result<Vec<u8>, EstampaError>,
}

/// Emission table, in wire order.
const FORMAT_COMMANDS: &[FormatCommand] = &[
    FormatCommand {
        name: "line spacing",
        is_set: |f| f.line_spacing.is_some(),
        encode: |f| Ok(f.line_spacing.map(LineSpacing::command).unwrap_or_default()),
    },
    FormatCommand {
        name: "character pitch",
        is_set: |f| f.character_pitch.is_some(),
        encode: |f| {
            Ok(f.character_pitch
                .map(|p| commands::master_select(p.master_select_bits()))
                .unwrap_or_default())
        },
    },
    FormatCommand {
        name: "page length",
        is_set: |f| f.page_length.is_some() && !f.use_printer_page_length,
        encode: |f| Ok(f.page_length.map(commands::page_length_lines).unwrap_or_default()),
    },
    FormatCommand {
        name: "page width",
        is_set: |f| f.page_width.is_some() && f.right_margin.is_none(),
        encode: encode_right_boundary,
    },
    FormatCommand {
        name: "left margin",
        is_set: |f| f.left_margin.is_some(),
        encode: |f| Ok(f.left_margin.map(commands::left_margin).unwrap_or_default()),
    },
    FormatCommand {
        name: "right margin",
        is_set: |f| f.right_margin.is_some(),
        encode: encode_right_boundary,
    },
    FormatCommand {
        name: "bottom margin",
        is_set: |f| f.bottom_margin.is_some(),
        encode: |f| Ok(f.bottom_margin.map(commands::bottom_margin).unwrap_or_default()),
    },
    FormatCommand {
        name: "typeface",
        is_set: |f| f.typeface.is_some(),
        encode: |f| Ok(f.typeface.map(|t| commands::typeface(t.code())).unwrap_or_default()),
    },
];

fn encode_right_boundary(format: &PageFormat) -> Result<Vec<u8>, EstampaError> {
    Ok(format
        .right_boundary()?
        .map(commands::right_margin)
        .unwrap_or_default())
}

impl PageFormat {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a page format from a parsed JSON value.
    ///
    /// # Errors
    ///
    /// - `Template` if the value does not have the shape of a page format
    /// - `Validation` if a line spacing, pitch or typeface is not recognized
    pub fn from_json_value(value: serde_json::Value) -> Result<Self, EstampaError> {
        let raw: RawPageFormat = serde_json::from_value(value)?;
        Self::try_from(raw)
    }

    pub fn line_spacing(mut self, spacing: LineSpacing) -> Self {
        self.line_spacing = Some(spacing);
        self
    }

    pub fn character_pitch(mut self, pitch: CharacterPitch) -> Self {
        self.character_pitch = Some(pitch);
        self
    }

    pub fn page_length(mut self, lines: u8) -> Self {
        self.page_length = Some(lines);
        self
    }

    pub fn use_printer_page_length(mut self, enabled: bool) -> Self {
        self.use_printer_page_length = enabled;
        self
    }

    pub fn page_width(mut self, columns: u8) -> Self {
        self.page_width = Some(columns);
        self
    }

    pub fn left_margin(mut self, columns: u8) -> Self {
        self.left_margin = Some(columns);
        self
    }

    pub fn right_margin(mut self, columns: u8) -> Self {
        self.right_margin = Some(columns);
        self
    }

    pub fn bottom_margin(mut self, lines: u8) -> Self {
        self.bottom_margin = Some(lines);
        self
    }

    pub fn typeface(mut self, typeface: Typeface) -> Self {
        self.typeface = Some(typeface);
        self
    }

    pub fn auto_line_feed(mut self, enabled: bool) -> Self {
        self.auto_line_feed = enabled;
        self
    }

    pub fn auto_form_feed(mut self, enabled: bool) -> Self {
        self.auto_form_feed = enabled;
        self
    }

    /// Absolute right boundary in columns, if the format defines one.
    ///
    /// With a right margin this is `page_width - right_margin`; without one
    /// it is the page width itself.
    ///
    /// # Errors
    ///
    /// `Validation` when a right margin is set without a page width, when the
    /// right margin exceeds the page width, or when the left margin does not
    /// leave at least one column before the boundary.
    pub fn right_boundary(&self) -> Result<Option<u8>, EstampaError> {
        let boundary = match (self.page_width, self.right_margin) {
            (None, None) => return Ok(None),
            (None, Some(_)) => {
                return Err(EstampaError::Validation(
                    "Right margin requires a page width".to_string(),
                ));
            }
            (Some(width), None) => width,
            (Some(width), Some(right)) => width.checked_sub(right).ok_or_else(|| {
                EstampaError::Validation(format!(
                    "Right margin {} is larger than page width {}",
                    right, width
                ))
            })?,
        };

        if let Some(left) = self.left_margin
            && left >= boundary
        {
            return Err(EstampaError::Validation(format!(
                "Left margin {} leaves no printable columns before column {}",
                left, boundary
            )));
        }

        Ok(Some(boundary))
    }

    /// The commands this format emits after `ESC @`, one entry per setting.
    ///
    /// # Errors
    ///
    /// `Validation` if the margin settings are inconsistent.
    pub fn commands(&self) -> Result<Vec<(&'static str, Vec<u8>)>, EstampaError> {
        FORMAT_COMMANDS
            .iter()
            .filter(|cmd| (cmd.is_set)(self))
            .map(|cmd| (cmd.encode)(self).map(|bytes| (cmd.name, bytes)))
            .collect()
    }

    /// Build the ESC/P prefix: `ESC @` followed by every configured command.
    ///
    /// # Errors
    ///
    /// `Validation` if the margin settings are inconsistent.
    pub fn build(&self) -> Result<Vec<u8>, EstampaError> {
        let mut out = commands::init();
        for (name, bytes) in self.commands()? {
            log::debug!("page format: {} -> {:02X?}", name, bytes);
            out.extend(bytes);
        }
        Ok(out)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const ESC: u8 = 0x1B;

    #[test]
    fn test_empty_format_is_init_only() {
        assert_eq!(PageFormat::new().build().unwrap(), vec![ESC, b'@']);
    }

    #[test]
    fn test_line_spacing_eighth_inch() {
        let spacing: LineSpacing = "1/8".parse().unwrap();
        let result = PageFormat::new().line_spacing(spacing).build().unwrap();
        assert_eq!(result.len(), 4);
        assert_eq!(result, vec![ESC, b'@', ESC, 48]);
    }

    #[test]
    fn test_line_spacing_rejects_unknown() {
        assert!(matches!(
            "1/7".parse::<LineSpacing>(),
            Err(EstampaError::Validation(_))
        ));
        assert!("".parse::<LineSpacing>().is_err());
    }

    #[test]
    fn test_character_pitch_17() {
        let pitch: CharacterPitch = "17".parse().unwrap();
        let result = PageFormat::new().character_pitch(pitch).build().unwrap();
        assert_eq!(result, vec![ESC, b'@', ESC, 33, 4]);
    }

    #[test]
    fn test_character_pitch_codes() {
        let codes: Vec<u8> = ["5", "6", "10", "12", "17", "20"]
            .iter()
            .map(|s| s.parse::<CharacterPitch>().unwrap().master_select_bits())
            .collect();
        assert_eq!(codes, vec![32, 33, 0, 1, 4, 5]);
        assert!("15".parse::<CharacterPitch>().is_err());
    }

    #[test]
    fn test_page_length() {
        let result = PageFormat::new()
            .page_length(10)
            .use_printer_page_length(false)
            .build()
            .unwrap();
        assert_eq!(result, vec![ESC, b'@', ESC, 67, 10]);
    }

    #[test]
    fn test_use_printer_page_length_suppresses_command() {
        let result = PageFormat::new()
            .page_length(10)
            .use_printer_page_length(true)
            .build()
            .unwrap();
        assert_eq!(result, vec![ESC, b'@']);
    }

    #[test]
    fn test_page_width() {
        let result = PageFormat::new().page_width(40).build().unwrap();
        assert_eq!(result, vec![ESC, b'@', ESC, 81, 40]);
    }

    #[test]
    fn test_left_and_right_margin() {
        let result = PageFormat::new()
            .page_width(80)
            .left_margin(5)
            .right_margin(10)
            .build()
            .unwrap();
        assert_eq!(result, vec![ESC, b'@', ESC, 108, 5, ESC, 81, 70]);
    }

    #[test]
    fn test_right_margin_without_width_fails() {
        let result = PageFormat::new().right_margin(10).build();
        assert!(matches!(result, Err(EstampaError::Validation(_))));
    }

    #[test]
    fn test_right_margin_wider_than_page_fails() {
        let result = PageFormat::new().page_width(8).right_margin(10).build();
        assert!(matches!(result, Err(EstampaError::Validation(_))));
    }

    #[test]
    fn test_left_margin_past_boundary_fails() {
        let result = PageFormat::new()
            .page_width(20)
            .right_margin(10)
            .left_margin(10)
            .build();
        assert!(matches!(result, Err(EstampaError::Validation(_))));
    }

    #[test]
    fn test_bottom_margin() {
        let result = PageFormat::new().bottom_margin(80).build().unwrap();
        assert_eq!(result, vec![ESC, b'@', ESC, 78, 80]);
    }

    #[test]
    fn test_typeface() {
        let roman = PageFormat::new()
            .typeface("roman".parse().unwrap())
            .build()
            .unwrap();
        assert_eq!(roman, vec![ESC, b'@', ESC, 107, 0]);

        let sans = PageFormat::new()
            .typeface("sans-serif".parse().unwrap())
            .build()
            .unwrap();
        assert_eq!(sans, vec![ESC, b'@', ESC, 107, 1]);
    }

    #[test]
    fn test_typeface_rejects_unknown() {
        assert!(matches!(
            "comic-sans".parse::<Typeface>(),
            Err(EstampaError::Validation(_))
        ));
    }

    #[test]
    fn test_build_is_idempotent() {
        let format = PageFormat::new()
            .line_spacing(LineSpacing::SixthInch)
            .page_length(66)
            .typeface(Typeface::Courier);
        assert_eq!(format.build().unwrap(), format.build().unwrap());
    }

    #[test]
    fn test_build_ignores_setter_order() {
        let a = PageFormat::new()
            .typeface(Typeface::SansSerif)
            .bottom_margin(2)
            .left_margin(3)
            .page_width(60)
            .character_pitch(CharacterPitch::Cpi12)
            .line_spacing(LineSpacing::EighthInch);
        let b = PageFormat::new()
            .line_spacing(LineSpacing::EighthInch)
            .character_pitch(CharacterPitch::Cpi12)
            .page_width(60)
            .left_margin(3)
            .bottom_margin(2)
            .typeface(Typeface::SansSerif);
        assert_eq!(a.build().unwrap(), b.build().unwrap());
        assert_eq!(
            a.build().unwrap(),
            vec![
                ESC, b'@', ESC, b'0', ESC, b'!', 1, ESC, b'Q', 60, ESC, b'l', 3, ESC, b'N', 2,
                ESC, b'k', 1,
            ]
        );
    }

    #[test]
    fn test_commands_names_in_order() {
        let format = PageFormat::new()
            .typeface(Typeface::Roman)
            .page_length(12)
            .line_spacing(LineSpacing::SixthInch);
        let names: Vec<&str> = format
            .commands()
            .unwrap()
            .into_iter()
            .map(|(name, _)| name)
            .collect();
        assert_eq!(names, vec!["line spacing", "page length", "typeface"]);
    }

    #[test]
    fn test_deserialize_from_json() {
        let format: PageFormat = serde_json::from_str(
            r#"{"lineSpacing": "1/8", "characterPitch": 17, "pageLength": 10,
                "typeface": "Sans-Serif", "autoLineFeed": true}"#,
        )
        .unwrap();
        assert_eq!(format.line_spacing, Some(LineSpacing::EighthInch));
        assert_eq!(format.character_pitch, Some(CharacterPitch::Cpi17));
        assert_eq!(format.page_length, Some(10));
        assert_eq!(format.typeface, Some(Typeface::SansSerif));
        assert!(format.auto_line_feed);
        assert!(format.auto_form_feed);
    }

    #[test]
    fn test_deserialize_rejects_invalid_values() {
        assert!(serde_json::from_str::<PageFormat>(r#"{"typeface": "gothic"}"#).is_err());
        assert!(serde_json::from_str::<PageFormat>(r#"{"pageLength": -1}"#).is_err());
        assert!(serde_json::from_str::<PageFormat>(r#"{"pageWidth": 300}"#).is_err());
        assert!(serde_json::from_str::<PageFormat>(r#"{"characterPitch": 15}"#).is_err());
    }

    #[test]
    fn test_from_json_value_unknown_settings_are_validation_errors() {
        for json in [
            r#"{"typeface": "gothic"}"#,
            r#"{"lineSpacing": "1/5"}"#,
            r#"{"characterPitch": 15}"#,
            r#"{"characterPitch": "wide"}"#,
        ] {
            let value: serde_json::Value = serde_json::from_str(json).unwrap();
            let result = PageFormat::from_json_value(value);
            assert!(
                matches!(result, Err(EstampaError::Validation(_))),
                "{} gave {:?}",
                json,
                result
            );
        }
    }

    #[test]
    fn test_from_json_value_structural_errors_are_template_errors() {
        for json in [
            r#"{"pageLength": -1}"#,
            r#"{"pageWidth": 300}"#,
            r#"{"typeface": 3}"#,
            r#""compact""#,
        ] {
            let value: serde_json::Value = serde_json::from_str(json).unwrap();
            assert!(matches!(
                PageFormat::from_json_value(value),
                Err(EstampaError::Template(_))
            ));
        }
    }

    #[test]
    fn test_from_json_value_defaults() {
        let format = PageFormat::from_json_value(serde_json::json!({})).unwrap();
        assert_eq!(format, PageFormat::default());
        assert!(format.auto_form_feed);
    }

    #[test]
    fn test_typeface_table_codes() {
        for (expected, (name, typeface)) in TYPEFACE_NAMES.iter().enumerate() {
            let parsed: Typeface = name.parse().unwrap();
            assert_eq!(parsed, *typeface);
            assert_eq!(parsed.code() as usize, expected);
            assert_eq!(parsed.as_str(), *name);
            assert_eq!(
                PageFormat::new().typeface(parsed).build().unwrap(),
                vec![ESC, b'@', ESC, b'k', expected as u8]
            );
        }
        assert_eq!(TYPEFACE_NAMES.len(), 12);
    }
}
