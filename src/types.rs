use std::collections::HashMap;

// Types listed here are either shared across multiple files and/or exposed via the library.

/// Represents a CUSIP security identifier. It is treated as an opaque key and is never validated.
pub type Cusip = String;

/// Represents the human-readable name of a security, exactly as it appears in the source table.
pub type SecurityName = String;

/// Represents a ticker symbol (e.g., stock ticker) as an owned `String`. An empty string means
/// the symbol is absent.
pub type TickerSymbol = String;

/// Represents the `count` column. It is carried through as text and never parsed.
pub type SecurityCount = String;

/// A security name after lowercase folding. Used as the key of the name index.
pub type NameKey = String;

/// Maps a lowercased security name to the last ticker symbol seen for it.
pub type NameSymbolMap = HashMap<NameKey, TickerSymbol>;

/// Maps a CUSIP to the last ticker symbol seen for it.
pub type CusipSymbolMap = HashMap<Cusip, TickerSymbol>;
