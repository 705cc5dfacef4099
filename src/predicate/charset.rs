//! Character classes used for membership tests

use std::fmt;

use unicode_general_category::{get_general_category, GeneralCategory as Gc};

/// A set of acceptable characters.
///
/// Classes are small bit sets over Unicode general categories and can be
/// combined with [`union`](CharacterClass::union) (or `|`).
///
/// | class         | members                                        |
/// |---------------|------------------------------------------------|
/// | `LETTERS`     | letters and marks (`L*`, `M*`)                 |
/// | `DIGITS`      | decimal digits (`Nd`)                          |
/// | `PUNCTUATION` | punctuation (`P*`); `$`, `+` etc. are symbols  |
/// | `WHITESPACE`  | space separators (`Zs`) and tab                |
/// | `UPPERCASE`   | uppercase and titlecase letters (`Lu`, `Lt`)   |
///
/// # Example
///
/// ```rust
/// use signup_validation::predicate::CharacterClass;
///
/// let name_chars = CharacterClass::LETTERS | CharacterClass::PUNCTUATION;
/// assert!(name_chars.contains('é'));
/// assert!(name_chars.contains('-'));
/// assert!(!name_chars.contains('7'));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CharacterClass(u8);

impl CharacterClass {
    /// The empty class; contains nothing.
    pub const EMPTY: Self = Self(0);
    /// Letters and combining marks.
    pub const LETTERS: Self = Self(1);
    /// Decimal digits.
    pub const DIGITS: Self = Self(1 << 1);
    /// Punctuation characters.
    pub const PUNCTUATION: Self = Self(1 << 2);
    /// Horizontal whitespace.
    pub const WHITESPACE: Self = Self(1 << 3);
    /// Uppercase and titlecase letters.
    pub const UPPERCASE: Self = Self(1 << 4);

    /// Union of two classes.
    #[inline]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Whether `c` belongs to any member category of this class.
    pub fn contains(self, c: char) -> bool {
        let category = get_general_category(c);
        (self.has(Self::LETTERS) && is_letter_or_mark(category))
            || (self.has(Self::DIGITS) && category == Gc::DecimalNumber)
            || (self.has(Self::PUNCTUATION) && is_punctuation(category))
            || (self.has(Self::WHITESPACE) && is_horizontal_whitespace(c))
            || (self.has(Self::UPPERCASE)
                && matches!(category, Gc::UppercaseLetter | Gc::TitlecaseLetter))
    }

    #[inline]
    const fn has(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }
}

impl std::ops::BitOr for CharacterClass {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl fmt::Debug for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const NAMES: [(CharacterClass, &str); 5] = [
            (CharacterClass::LETTERS, "LETTERS"),
            (CharacterClass::DIGITS, "DIGITS"),
            (CharacterClass::PUNCTUATION, "PUNCTUATION"),
            (CharacterClass::WHITESPACE, "WHITESPACE"),
            (CharacterClass::UPPERCASE, "UPPERCASE"),
        ];
        let mut set = f.debug_set();
        for (class, name) in NAMES {
            if self.has(class) {
                set.entry(&format_args!("{name}"));
            }
        }
        set.finish()
    }
}

/// Space separators and tab, without line terminators.
pub(crate) fn is_horizontal_whitespace(c: char) -> bool {
    c == '\t' || get_general_category(c) == Gc::SpaceSeparator
}

fn is_letter_or_mark(category: Gc) -> bool {
    matches!(
        category,
        Gc::UppercaseLetter
            | Gc::LowercaseLetter
            | Gc::TitlecaseLetter
            | Gc::ModifierLetter
            | Gc::OtherLetter
            | Gc::NonspacingMark
            | Gc::SpacingMark
            | Gc::EnclosingMark
    )
}

fn is_punctuation(category: Gc) -> bool {
    matches!(
        category,
        Gc::ConnectorPunctuation
            | Gc::DashPunctuation
            | Gc::OpenPunctuation
            | Gc::ClosePunctuation
            | Gc::InitialPunctuation
            | Gc::FinalPunctuation
            | Gc::OtherPunctuation
    )
}
