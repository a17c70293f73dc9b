#![forbid(unsafe_code)]

//! Mask-based input formatting.
//!
//! A [`MaskPattern`] is a literal mask string where `#` marks positions to
//! be filled from the cleaned (digits-only) input; every other character is
//! passed through literally. [`Formatter`] pairs a pattern with a
//! [`MaskFill`] mode that decides what happens when the input runs out
//! before the mask does.
//!
//! ```
//! use statefield_form::{Formatter, MaskFill, MaskPattern};
//!
//! let phone = Formatter::new(MaskPattern::Phone);
//! assert_eq!(phone.format("1234567890"), "(123) 456-7890");
//! assert_eq!(phone.format("123"), "(123");
//!
//! let padded = phone.with_fill(MaskFill::PadBlank);
//! assert_eq!(padded.format("123"), "(123)    -    ");
//! ```
//!
//! Formatting never fails: any input, including empty, produces a valid
//! (possibly empty) output string.

/// The mask character that consumes one input character.
pub const PLACEHOLDER: char = '#';

/// A named masking pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MaskPattern {
    /// `(###) ###-####`
    Phone,
    /// `##/##/####`
    DateOfBirth,
    /// `#### #### #### ####`
    CreditCard,
}

impl MaskPattern {
    /// The literal mask string.
    #[must_use]
    pub const fn mask(self) -> &'static str {
        match self {
            Self::Phone => "(###) ###-####",
            Self::DateOfBirth => "##/##/####",
            Self::CreditCard => "#### #### #### ####",
        }
    }

    /// Remove every character that cannot fill a placeholder.
    ///
    /// All built-in patterns carry digit-only content, so this keeps ASCII
    /// digits and drops everything else (mask literals included), making it
    /// the inverse of [`Formatter::format`].
    #[must_use]
    pub fn strip(self, input: &str) -> String {
        input.chars().filter(char::is_ascii_digit).collect()
    }

    /// Number of placeholder positions in the mask.
    #[must_use]
    pub fn capacity(self) -> usize {
        self.mask().chars().filter(|&c| c == PLACEHOLDER).count()
    }
}

/// What to emit once the input is exhausted mid-mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MaskFill {
    /// Stop emitting entirely: `"123"` against the phone mask yields
    /// `"(123"` and empty input yields `""`.
    #[default]
    Truncate,
    /// Keep walking the mask, emitting literals as-is and a blank space for
    /// each unmet placeholder: `"123"` yields `"(123)    -    "`.
    PadBlank,
}

/// A masking pattern paired with a fill mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Formatter {
    pattern: MaskPattern,
    fill: MaskFill,
}

impl Formatter {
    /// Create a formatter for `pattern` with the default
    /// [`Truncate`](MaskFill::Truncate) fill.
    #[must_use]
    pub const fn new(pattern: MaskPattern) -> Self {
        Self {
            pattern,
            fill: MaskFill::Truncate,
        }
    }

    /// Set the fill mode (builder).
    #[must_use]
    pub const fn with_fill(mut self, fill: MaskFill) -> Self {
        self.fill = fill;
        self
    }

    /// The pattern this formatter applies.
    #[must_use]
    pub const fn pattern(self) -> MaskPattern {
        self.pattern
    }

    /// The fill mode this formatter uses.
    #[must_use]
    pub const fn fill(self) -> MaskFill {
        self.fill
    }

    /// Strip mask characters from `input`, leaving only fillable content.
    #[must_use]
    pub fn strip(self, input: &str) -> String {
        self.pattern.strip(input)
    }

    /// Format `raw` against the mask.
    ///
    /// The input is stripped first, so already-formatted text is handled
    /// the same as raw digits. Input beyond the mask's capacity is ignored.
    #[must_use]
    pub fn format(self, raw: &str) -> String {
        let stripped = self.pattern.strip(raw);
        let mut digits = stripped.chars();
        let mut next = digits.next();
        let mut out = String::with_capacity(self.pattern.mask().len());

        for c in self.pattern.mask().chars() {
            match next {
                None => match self.fill {
                    MaskFill::Truncate => break,
                    MaskFill::PadBlank => out.push(if c == PLACEHOLDER { ' ' } else { c }),
                },
                Some(digit) => {
                    if c == PLACEHOLDER {
                        out.push(digit);
                        next = digits.next();
                    } else {
                        out.push(c);
                    }
                }
            }
        }
        out
    }
}
