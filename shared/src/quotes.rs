//! The rotating quotation list and its cursor.

/// A single quotation with its attribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quote {
    /// Body of the quotation, without surrounding quotation marks.
    pub text: &'static str,
    /// Source attribution shown under the text.
    pub reference: &'static str,
}

/// The fixed quotation list, baked in at build time.
pub const QUOTES: [Quote; 10] = [
    Quote {
        text: "The best among you are those who have the best manners and character.",
        reference: "Prophet Muhammad (\u{fdfa})",
    },
    Quote {
        text: "Whoever believes in Allah and the Last Day, let him speak good or remain silent.",
        reference: "Sahih al-Bukhari",
    },
    Quote {
        text: "Verily, with hardship comes ease.",
        reference: "Qur'an 94:5",
    },
    Quote {
        text: "Do not lose hope, nor be sad.",
        reference: "Qur'an 3:139",
    },
    Quote {
        text: "The strong believer is better and more beloved to Allah than the weak believer.",
        reference: "Sahih Muslim",
    },
    Quote {
        text: "Allah does not burden a soul beyond that it can bear.",
        reference: "Qur'an 2:286",
    },
    Quote {
        text: "Kindness is a mark of faith, and whoever is not kind has no faith.",
        reference: "Sahih Muslim",
    },
    Quote {
        text: "The most perfect believer in faith is the one who is best in character.",
        reference: "Sunan al-Tirmidhi",
    },
    Quote {
        text: "And whoever relies upon Allah \u{2013} then He is sufficient for him.",
        reference: "Qur'an 65:3",
    },
    Quote {
        text: "Spread the salaam, feed the hungry, and pray at night when people are sleeping.",
        reference: "Sunan Ibn Majah",
    },
];

/// Cursor into [`QUOTES`], wrapping on both ends.
///
/// Exactly one position is current at any time; `next`/`prev` move by one
/// with modulo wraparound and can never leave the list bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuoteCursor {
    index: usize,
}

impl QuoteCursor {
    /// Creates a cursor at `start`, reduced modulo the list length.
    pub fn new(start: usize) -> Self {
        Self {
            index: start % QUOTES.len(),
        }
    }

    /// The current position in the list.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The quote at the current position.
    pub fn current(&self) -> Quote {
        QUOTES[self.index]
    }

    /// Advances to the next quote, wrapping past the end.
    pub fn next(&mut self) -> Quote {
        self.index = (self.index + 1) % QUOTES.len();
        self.current()
    }

    /// Steps back to the previous quote, wrapping past the start.
    pub fn prev(&mut self) -> Quote {
        self.index = (self.index + QUOTES.len() - 1) % QUOTES.len();
        self.current()
    }
}
