//! Configuration for dump behavior.
//!
//! This module provides types to configure how a dump is performed:
//!
//! - [`DumpConfig`] - Controls line layout, rendering, bounds and search
//! - [`OutputKind`] - Selects the textual form each field is rendered in
//! - [`ByteOrder`] - Optional per-field byte permutation
//!
//! # Example
//!
//! ```
//! use dumprs::{DumpConfig, OutputKind};
//!
//! // Classic hex dump layout: one-byte fields, 16 per line
//! let config = DumpConfig::default().with_show_address(true);
//!
//! // Four-byte records rendered as signed decimals, comma separated
//! let config = DumpConfig::new(4, 4)?
//!     .with_output(OutputKind::Decimal)
//!     .with_col_delimiter(",");
//! # Ok::<(), dumprs::DumpError>(())
//! ```

use crate::error::DumpError;
use crate::search::SearchPattern;

/// Default field width (1 byte per field).
pub const DEFAULT_FIELD_WIDTH: usize = 1;

/// Default number of fields per line (16).
pub const DEFAULT_FIELDS_PER_LINE: usize = 16;

/// Default delimiter written between fields (a single space).
pub const DEFAULT_COL_DELIMITER: &str = " ";

/// Default delimiter written after each line (a newline).
pub const DEFAULT_ROW_DELIMITER: &str = "\n";

/// Widest field the numeric renderers and byte permutations accept (8 bytes,
/// one 64-bit word).
pub const MAX_NUMERIC_FIELD_WIDTH: usize = 8;

/// Textual form each field is rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputKind {
    /// Two lowercase hex digits per byte, concatenated within a field.
    #[default]
    Hex,

    /// One signed decimal per field, packed big-endian and sign-extended
    /// from the field width.
    Decimal,

    /// One unsigned decimal per field, packed big-endian.
    UnsignedDecimal,

    /// One character per byte; non-printable bytes become `.`.
    Ascii,

    /// Bytes copied through untouched. Addresses and delimiters are
    /// suppressed.
    Raw,
}

/// Byte order applied to each field before rendering.
///
/// A permutation lists, for every output position, the input position the
/// byte is taken from. `[3, 2, 1, 0]` reverses a four-byte field, which is
/// how little-endian records are turned into readable big-endian text.
///
/// # Example
///
/// ```
/// use dumprs::ByteOrder;
///
/// let order = ByteOrder::from_digits("3210")?;
/// assert_eq!(order, ByteOrder::Permuted(vec![3, 2, 1, 0]));
/// assert_eq!(order.field_width(), Some(4));
/// # Ok::<(), dumprs::DumpError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum ByteOrder {
    /// Bytes are rendered in the order they were read.
    #[default]
    Natural,

    /// Bytes are rearranged within each field; `order[i]` is the input
    /// position rendered at output position `i`.
    Permuted(Vec<usize>),
}

impl ByteOrder {
    /// Parses a permutation from a digit string such as `"3210"`.
    ///
    /// Each digit is an input position; the string length is the field width
    /// the permutation applies to. Positions must be unique and in range.
    ///
    /// # Errors
    ///
    /// Returns [`DumpError::InvalidConfig`] if the string is empty, longer
    /// than eight digits, contains a non-digit, repeats a position, or names
    /// a position outside the field.
    ///
    /// # Example
    ///
    /// ```
    /// use dumprs::ByteOrder;
    ///
    /// assert_eq!(ByteOrder::from_digits("10")?, ByteOrder::Permuted(vec![1, 0]));
    /// assert!(ByteOrder::from_digits("012345678").is_err(), "nine digits");
    /// assert!(ByteOrder::from_digits("02").is_err(), "position 2 in a two-byte field");
    /// # Ok::<(), dumprs::DumpError>(())
    /// ```
    pub fn from_digits(spec: &str) -> Result<Self, DumpError> {
        if spec.is_empty() || spec.len() > MAX_NUMERIC_FIELD_WIDTH {
            return Err(DumpError::InvalidConfig {
                message: "byte order must be 1 to 8 digits",
            });
        }

        let mut order = Vec::with_capacity(spec.len());
        let mut seen = [false; MAX_NUMERIC_FIELD_WIDTH];
        for ch in spec.chars() {
            let position = match ch.to_digit(10) {
                Some(digit) => digit as usize,
                None => {
                    return Err(DumpError::InvalidConfig {
                        message: "byte order must contain only digits",
                    });
                }
            };
            if position >= spec.len() {
                return Err(DumpError::InvalidConfig {
                    message: "byte order positions must be within the field",
                });
            }
            if seen[position] {
                return Err(DumpError::InvalidConfig {
                    message: "byte order must not repeat a position",
                });
            }
            seen[position] = true;
            order.push(position);
        }

        Ok(ByteOrder::Permuted(order))
    }

    /// The field width this order applies to, or `None` for [`Natural`]
    /// which fits any width.
    ///
    /// [`Natural`]: ByteOrder::Natural
    pub fn field_width(&self) -> Option<usize> {
        match self {
            ByteOrder::Natural => None,
            ByteOrder::Permuted(order) => Some(order.len()),
        }
    }
}

/// Configuration for a dump run.
///
/// `DumpConfig` controls how the input stream is split into lines and how
/// each line is rendered:
///
/// - Line layout (`field_width` bytes per field, `fields_per_line` fields)
/// - Rendering ([`OutputKind`], delimiters, optional address prefix)
/// - Address bounds (`start`, `end`) limiting which bytes are read
/// - Optional per-field [`ByteOrder`] permutation
/// - Optional [`SearchPattern`] each line is synchronized to
///
/// # Constraints
///
/// - `field_width` and `fields_per_line` must be non-zero and their product
///   must not overflow
/// - Decimal output and byte permutations require `field_width <= 8`
/// - A permutation must list each field position exactly once
/// - A search pattern must fit within one line
///
/// # Example
///
/// ```
/// use dumprs::{DumpConfig, OutputKind};
///
/// // Use default configuration
/// let config = DumpConfig::default();
///
/// // Custom configuration
/// let config = DumpConfig::new(4, 4)?;
///
/// // Builder pattern
/// let config = DumpConfig::default()
///     .with_output(OutputKind::Ascii)
///     .with_show_address(true)
///     .with_col_delimiter("");
/// # Ok::<(), dumprs::DumpError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DumpConfig {
    /// Bytes per field.
    field_width: usize,

    /// Fields per output line.
    fields_per_line: usize,

    /// Textual form fields are rendered in.
    output: OutputKind,

    /// Whether each line is prefixed with its base address.
    show_address: bool,

    /// Delimiter written between fields.
    col_delimiter: String,

    /// Delimiter written after each line.
    row_delimiter: String,

    /// Stream offset reading starts at.
    start: u64,

    /// Stream offset reading stops at, if bounded.
    end: Option<u64>,

    /// Byte order applied to each field before rendering.
    byte_order: ByteOrder,

    /// Pattern each line is synchronized to, if any.
    search: Option<SearchPattern>,
}

impl DumpConfig {
    /// Creates a configuration with the given line layout and everything
    /// else at its default.
    ///
    /// # Arguments
    ///
    /// * `field_width` - Bytes per field (must be non-zero)
    /// * `fields_per_line` - Fields per output line (must be non-zero)
    ///
    /// # Errors
    ///
    /// Returns [`DumpError::InvalidConfig`] if either value is zero or their
    /// product overflows.
    ///
    /// # Example
    ///
    /// ```
    /// use dumprs::DumpConfig;
    ///
    /// let config = DumpConfig::new(2, 8)?;
    /// assert_eq!(config.line_capacity(), 16);
    /// # Ok::<(), dumprs::DumpError>(())
    /// ```
    pub fn new(field_width: usize, fields_per_line: usize) -> Result<Self, DumpError> {
        let config = Self {
            field_width,
            fields_per_line,
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Sets the textual form fields are rendered in.
    ///
    /// Note: This does not validate the configuration. Use
    /// [`DumpConfig::validate`] to check if the configuration is valid.
    pub fn with_output(mut self, output: OutputKind) -> Self {
        self.output = output;
        self
    }

    /// Enables or disables the per-line address prefix.
    pub fn with_show_address(mut self, show: bool) -> Self {
        self.show_address = show;
        self
    }

    /// Sets the delimiter written between fields.
    ///
    /// An empty string joins fields with nothing between them.
    ///
    /// # Example
    ///
    /// ```
    /// use dumprs::DumpConfig;
    ///
    /// let config = DumpConfig::default().with_col_delimiter(",");
    /// assert_eq!(config.col_delimiter(), ",");
    /// ```
    pub fn with_col_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.col_delimiter = delimiter.into();
        self
    }

    /// Sets the delimiter written after each line.
    pub fn with_row_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.row_delimiter = delimiter.into();
        self
    }

    /// Sets the stream offset reading starts at.
    pub fn with_start(mut self, start: u64) -> Self {
        self.start = start;
        self
    }

    /// Bounds reading at the given stream offset. Bytes at or past `end`
    /// are never read.
    pub fn with_end(mut self, end: u64) -> Self {
        self.end = Some(end);
        self
    }

    /// Sets the byte order applied to each field before rendering.
    ///
    /// Note: This does not validate the configuration. Use
    /// [`DumpConfig::validate`] to check if the configuration is valid.
    ///
    /// # Example
    ///
    /// ```
    /// use dumprs::{ByteOrder, DumpConfig};
    ///
    /// let config = DumpConfig::new(4, 4)?
    ///     .with_byte_order(ByteOrder::from_digits("3210")?);
    /// assert!(config.validate().is_ok());
    /// # Ok::<(), dumprs::DumpError>(())
    /// ```
    pub fn with_byte_order(mut self, order: ByteOrder) -> Self {
        self.byte_order = order;
        self
    }

    /// Sets the pattern each line is synchronized to.
    ///
    /// # Example
    ///
    /// ```
    /// use dumprs::{DumpConfig, SearchPattern};
    ///
    /// let config = DumpConfig::new(2, 1)?
    ///     .with_search(SearchPattern::from_hex("ff04")?);
    /// # Ok::<(), dumprs::DumpError>(())
    /// ```
    pub fn with_search(mut self, pattern: SearchPattern) -> Self {
        self.search = Some(pattern);
        self
    }

    /// Returns the bytes per field.
    pub fn field_width(&self) -> usize {
        self.field_width
    }

    /// Returns the fields per output line.
    pub fn fields_per_line(&self) -> usize {
        self.fields_per_line
    }

    /// Returns the line capacity in bytes (`field_width * fields_per_line`).
    pub fn line_capacity(&self) -> usize {
        self.field_width.saturating_mul(self.fields_per_line)
    }

    /// Returns the textual form fields are rendered in.
    pub fn output(&self) -> OutputKind {
        self.output
    }

    /// Returns whether lines are prefixed with their base address.
    pub fn show_address(&self) -> bool {
        self.show_address
    }

    /// Returns the delimiter written between fields.
    pub fn col_delimiter(&self) -> &str {
        &self.col_delimiter
    }

    /// Returns the delimiter written after each line.
    pub fn row_delimiter(&self) -> &str {
        &self.row_delimiter
    }

    /// Returns the stream offset reading starts at.
    pub fn start(&self) -> u64 {
        self.start
    }

    /// Returns the stream offset reading stops at, if bounded.
    pub fn end(&self) -> Option<u64> {
        self.end
    }

    /// Returns the byte order applied to each field.
    pub fn byte_order(&self) -> &ByteOrder {
        &self.byte_order
    }

    /// Returns the pattern each line is synchronized to, if any.
    pub fn search(&self) -> Option<&SearchPattern> {
        self.search.as_ref()
    }

    /// Validates the current configuration.
    ///
    /// Returns an error if the configuration is invalid.
    ///
    /// # Example
    ///
    /// ```
    /// use dumprs::{ByteOrder, DumpConfig};
    ///
    /// // A three-byte permutation cannot apply to one-byte fields.
    /// let config = DumpConfig::default().with_byte_order(ByteOrder::from_digits("210")?);
    /// assert!(config.validate().is_err());
    /// # Ok::<(), dumprs::DumpError>(())
    /// ```
    pub fn validate(&self) -> Result<(), DumpError> {
        if self.field_width == 0 {
            return Err(DumpError::InvalidConfig {
                message: "field width must be non-zero",
            });
        }

        if self.fields_per_line == 0 {
            return Err(DumpError::InvalidConfig {
                message: "fields per line must be non-zero",
            });
        }

        if self.field_width.checked_mul(self.fields_per_line).is_none() {
            return Err(DumpError::InvalidConfig {
                message: "line capacity overflows",
            });
        }

        if matches!(self.output, OutputKind::Decimal | OutputKind::UnsignedDecimal)
            && self.field_width > MAX_NUMERIC_FIELD_WIDTH
        {
            return Err(DumpError::InvalidConfig {
                message: "decimal output supports field widths up to 8 bytes",
            });
        }

        if let ByteOrder::Permuted(order) = &self.byte_order {
            if order.len() != self.field_width {
                return Err(DumpError::InvalidConfig {
                    message: "byte order must list one position per field byte",
                });
            }
            if order.len() > MAX_NUMERIC_FIELD_WIDTH {
                return Err(DumpError::InvalidConfig {
                    message: "byte order supports field widths up to 8 bytes",
                });
            }
            let mut seen = [false; MAX_NUMERIC_FIELD_WIDTH];
            for &position in order {
                if position >= order.len() {
                    return Err(DumpError::InvalidConfig {
                        message: "byte order positions must be within the field",
                    });
                }
                if seen[position] {
                    return Err(DumpError::InvalidConfig {
                        message: "byte order must not repeat a position",
                    });
                }
                seen[position] = true;
            }
        }

        if let Some(pattern) = &self.search {
            if pattern.byte_width() > self.line_capacity() {
                return Err(DumpError::InvalidConfig {
                    message: "search pattern does not fit in one line",
                });
            }
        }

        Ok(())
    }
}

impl Default for DumpConfig {
    fn default() -> Self {
        Self {
            field_width: DEFAULT_FIELD_WIDTH,
            fields_per_line: DEFAULT_FIELDS_PER_LINE,
            output: OutputKind::default(),
            show_address: false,
            col_delimiter: DEFAULT_COL_DELIMITER.to_string(),
            row_delimiter: DEFAULT_ROW_DELIMITER.to_string(),
            start: 0,
            end: None,
            byte_order: ByteOrder::default(),
            search: None,
        }
    }
}
