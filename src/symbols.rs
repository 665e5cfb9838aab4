use evdev::KeyCode;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;

/// A logical key as seen by the tracker.
///
/// Wraps the raw evdev code. Equality is identity; the ordering is by the raw
/// numeric code and exists only so combo snapshots sort deterministically.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeySymbol(pub KeyCode);

impl KeySymbol {
    /// The sort key used for combo snapshots.
    pub fn order_key(&self) -> u16 {
        self.0.0
    }
}

impl Ord for KeySymbol {
    fn cmp(&self, other: &Self) -> Ordering {
        self.order_key().cmp(&other.order_key())
    }
}

impl PartialOrd for KeySymbol {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Debug for KeySymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl From<KeyCode> for KeySymbol {
    fn from(key: KeyCode) -> Self {
        Self(key)
    }
}

/// Resolves raw key codes to symbols.
///
/// Resolution is total: every code yields a symbol. A code the map does not
/// recognise resolves to the symbol carrying the raw code itself, so nothing
/// is silently dropped.
pub trait SymbolMap {
    fn resolve(&self, code: u16) -> KeySymbol;
}

/// Identity map: every raw code is its own symbol.
pub struct RawSymbols;

impl SymbolMap for RawSymbols {
    fn resolve(&self, code: u16) -> KeySymbol {
        KeySymbol(KeyCode(code))
    }
}

/// Config-driven map that rewrites selected raw codes, e.g. collapsing
/// `KEY_RIGHTCTRL` into `KEY_LEFTCTRL` so both controls track as one symbol.
pub struct AliasSymbols {
    aliases: HashMap<u16, KeyCode>,
}

impl AliasSymbols {
    pub fn new(aliases: HashMap<u16, KeyCode>) -> Self {
        Self { aliases }
    }
}

impl SymbolMap for AliasSymbols {
    fn resolve(&self, code: u16) -> KeySymbol {
        match self.aliases.get(&code) {
            Some(key) => KeySymbol(*key),
            None => KeySymbol(KeyCode(code)),
        }
    }
}
