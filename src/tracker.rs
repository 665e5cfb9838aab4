use crate::combo::ComboState;
use crate::symbols::{KeySymbol, SymbolMap};

/// Maximum entries kept in each history.
pub const HISTORY_CAP: usize = 3;

/// Bounded press/release history with a derived, sorted combo snapshot.
///
/// Updates are functional: `press`/`release` (and their raw-code wrappers
/// `key_down`/`key_up`) leave `self` untouched and return the next state,
/// so the host application threads one value through its event loop.
///
/// # Example
///
/// ```
/// use evdev::KeyCode;
/// use keywatch::{KeySymbol, KeyTracker};
///
/// let tracker = KeyTracker::new()
///     .press(KeySymbol(KeyCode::KEY_LEFTSHIFT))
///     .press(KeySymbol(KeyCode::KEY_TAB));
///
/// assert_eq!(tracker.last_pressed(), Some(KeySymbol(KeyCode::KEY_TAB)));
/// assert!(tracker.combo().pressed_is(&[
///     KeySymbol(KeyCode::KEY_TAB),
///     KeySymbol(KeyCode::KEY_LEFTSHIFT),
/// ]));
/// ```
///
/// Known limitation: a key physically held while three or more other keys are
/// pressed falls off the end of the press history and is forgotten until it is
/// pressed again. The bound is deliberate; recovery from that case belongs to
/// the application layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyTracker {
    /// Most-recent-first, no duplicate symbols, at most [`HISTORY_CAP`] entries.
    presses: Vec<KeySymbol>,
    /// Most-recent-first, duplicates allowed, at most [`HISTORY_CAP`] entries.
    releases: Vec<KeySymbol>,
    combo: ComboState,
}

impl KeyTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key-down for a raw code, resolved through `symbols`.
    #[must_use]
    pub fn key_down<M: SymbolMap + ?Sized>(&self, code: u16, symbols: &M) -> Self {
        self.press(symbols.resolve(code))
    }

    /// Record a key-up for a raw code, resolved through `symbols`.
    #[must_use]
    pub fn key_up<M: SymbolMap + ?Sized>(&self, code: u16, symbols: &M) -> Self {
        self.release(symbols.resolve(code))
    }

    /// Record a key-down.
    ///
    /// A symbol already in the press history moves to the front rather than
    /// appearing twice; the oldest entry beyond [`HISTORY_CAP`] is dropped.
    /// The release side is untouched.
    #[must_use]
    pub fn press(&self, sym: KeySymbol) -> Self {
        let mut presses = Vec::with_capacity(HISTORY_CAP + 1);
        presses.push(sym);
        presses.extend(self.presses.iter().copied().filter(|s| *s != sym));
        presses.truncate(HISTORY_CAP);

        let combo = ComboState::derive(&presses, &self.releases);
        Self {
            presses,
            releases: self.releases.clone(),
            combo,
        }
    }

    /// Record a key-up.
    ///
    /// The symbol leaves the press history (a no-op if it was never there or
    /// already evicted) and is prepended to the release history, which keeps
    /// duplicates so repeated click sequences stay visible.
    #[must_use]
    pub fn release(&self, sym: KeySymbol) -> Self {
        let presses: Vec<KeySymbol> =
            self.presses.iter().copied().filter(|s| *s != sym).collect();

        let mut releases = Vec::with_capacity(HISTORY_CAP + 1);
        releases.push(sym);
        releases.extend(self.releases.iter().copied());
        releases.truncate(HISTORY_CAP);

        let combo = ComboState::derive(&presses, &releases);
        Self {
            presses,
            releases,
            combo,
        }
    }

    /// Most recent key still considered held.
    pub fn last_pressed(&self) -> Option<KeySymbol> {
        self.presses.first().copied()
    }

    pub fn second_last_pressed(&self) -> Option<KeySymbol> {
        self.presses.get(1).copied()
    }

    pub fn third_last_pressed(&self) -> Option<KeySymbol> {
        self.presses.get(2).copied()
    }

    /// Most recently released key.
    pub fn last_released(&self) -> Option<KeySymbol> {
        self.releases.first().copied()
    }

    /// The sorted snapshot for combo pattern-matching.
    pub fn combo(&self) -> &ComboState {
        &self.combo
    }

    /// Raw press history, most recent first.
    pub fn press_history(&self) -> &[KeySymbol] {
        &self.presses
    }

    /// Raw release history, most recent first.
    pub fn release_history(&self) -> &[KeySymbol] {
        &self.releases
    }
}
