//! Symbol and message types for TREP.
//!
//! Defines the four-valued symbol alphabet and the message container that the
//! encoder, transformer, and verifier all operate on.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The four-valued symbol alphabet.
///
/// `Maybe` (θ) carries the channel's residual uncertainty and is the only
/// value that receives a measured entropy annotation. `Clear` (ε) marks an
/// idle/undefined channel; normal input never contains it, only the conjugate
/// transform's collapse branch produces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SymbolValue {
    /// Negative symbol.
    No,
    /// Affirmative symbol.
    Yes,
    /// Uncertain symbol (θ); never inverted by the conjugate transform.
    Maybe,
    /// Channel clear/idle (ε).
    Clear,
}

impl SymbolValue {
    /// Two-bit register encoding of the symbol.
    pub fn bits(&self) -> u8 {
        match self {
            Self::No => 0b00,
            Self::Yes => 0b01,
            Self::Maybe => 0b10,
            Self::Clear => 0b11,
        }
    }

    /// Sparse four-cell activation pattern for the symbol.
    pub fn sparse_pattern(&self) -> [u8; 4] {
        match self {
            Self::No => [0, 0, 1, 1],
            Self::Yes => [1, 1, 0, 0],
            Self::Maybe => [1, 0, 1, 0],
            Self::Clear => [0, 0, 0, 0],
        }
    }

    /// Check if this is the uncertain (θ) value.
    pub fn is_uncertain(&self) -> bool {
        matches!(self, Self::Maybe)
    }
}

impl fmt::Display for SymbolValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::No => write!(f, "NO"),
            Self::Yes => write!(f, "YES"),
            Self::Maybe => write!(f, "MAYBE"),
            Self::Clear => write!(f, "CLEAR"),
        }
    }
}

/// One unit of a message: a symbol value plus its entropy annotation in bits.
///
/// The annotation is `0.0` at construction and stays `0.0` for everything but
/// `Maybe`, which receives a measured value when the message is encoded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Symbol {
    value: SymbolValue,
    entropy: f64,
}

impl Symbol {
    /// Create a fresh, unannotated symbol.
    pub fn new(value: SymbolValue) -> Self {
        Self {
            value,
            entropy: 0.0,
        }
    }

    pub(crate) fn with_entropy(value: SymbolValue, entropy: f64) -> Self {
        Self { value, entropy }
    }

    /// The symbol's value.
    pub fn value(&self) -> SymbolValue {
        self.value
    }

    /// The symbol's entropy annotation in bits.
    pub fn entropy(&self) -> f64 {
        self.entropy
    }
}

/// An ordered, fixed-length sequence of symbols.
///
/// The per-symbol entropy annotation is the single source of truth;
/// [`Message::entropy_bits`] derives the full annotation sequence once the
/// message has been encoded. A message owns its storage outright, so deriving
/// an echo always allocates fresh, independent storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    symbols: Vec<Symbol>,
    encoded: bool,
}

impl Message {
    /// Build a message from a literal sequence of symbol values.
    pub fn new(values: impl IntoIterator<Item = SymbolValue>) -> Self {
        Self {
            symbols: values.into_iter().map(Symbol::new).collect(),
            encoded: false,
        }
    }

    pub(crate) fn from_parts(symbols: Vec<Symbol>, encoded: bool) -> Self {
        Self { symbols, encoded }
    }

    /// The symbol sequence.
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// The value sequence, without annotations.
    pub fn values(&self) -> Vec<SymbolValue> {
        self.symbols.iter().map(Symbol::value).collect()
    }

    /// Number of symbols in the message.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Check if the message holds no symbols.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Whether the encoder has annotated this message.
    pub fn is_encoded(&self) -> bool {
        self.encoded
    }

    /// Derived per-position entropy annotation sequence.
    ///
    /// `None` until the message has been encoded; afterwards exactly as long
    /// as the symbol sequence, with entry `i` equal to the annotation of
    /// symbol `i`.
    pub fn entropy_bits(&self) -> Option<Vec<f64>> {
        if self.encoded {
            Some(self.symbols.iter().map(Symbol::entropy).collect())
        } else {
            None
        }
    }

    /// Sparse activation matrix, one four-cell row per symbol.
    pub fn sparse_matrix(&self) -> Vec<[u8; 4]> {
        self.symbols
            .iter()
            .map(|symbol| symbol.value().sparse_pattern())
            .collect()
    }

    pub(crate) fn apply_annotations(&mut self, annotations: Vec<f64>) {
        for (symbol, entropy) in self.symbols.iter_mut().zip(annotations) {
            symbol.entropy = entropy;
        }
        self.encoded = true;
    }
}
