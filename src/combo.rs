use crate::symbols::KeySymbol;

/// Sorted view of the press and release histories, recomputed on every
/// tracker update. Sorting is by [`KeySymbol::order_key`], ascending, so a
/// given set of held keys always snapshots identically regardless of the
/// order they went down in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComboState {
    pressed: Vec<KeySymbol>,
    released: Vec<KeySymbol>,
}

impl ComboState {
    pub(crate) fn derive(presses: &[KeySymbol], releases: &[KeySymbol]) -> Self {
        let mut pressed = presses.to_vec();
        pressed.sort_unstable();
        let mut released = releases.to_vec();
        released.sort_unstable();
        Self { pressed, released }
    }

    /// Keys currently considered held, sorted ascending by order key.
    pub fn pressed(&self) -> &[KeySymbol] {
        &self.pressed
    }

    /// Recently released keys, sorted ascending by order key.
    pub fn released(&self) -> &[KeySymbol] {
        &self.released
    }

    pub fn held(&self, sym: KeySymbol) -> bool {
        self.pressed.contains(&sym)
    }

    /// True when exactly `combo` is held, in any order.
    pub fn pressed_is(&self, combo: &[KeySymbol]) -> bool {
        Self::matches(&self.pressed, combo)
    }

    /// True when the recent releases are exactly `combo`, in any order.
    pub fn released_is(&self, combo: &[KeySymbol]) -> bool {
        Self::matches(&self.released, combo)
    }

    fn matches(snapshot: &[KeySymbol], combo: &[KeySymbol]) -> bool {
        if snapshot.len() != combo.len() {
            return false;
        }
        let mut wanted = combo.to_vec();
        wanted.sort_unstable();
        snapshot == wanted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use evdev::KeyCode;

    fn sym(key: KeyCode) -> KeySymbol {
        KeySymbol(key)
    }

    #[test]
    fn derive_sorts_by_order_key() {
        let combo = ComboState::derive(
            &[sym(KeyCode::KEY_LEFTSHIFT), sym(KeyCode::KEY_TAB)],
            &[],
        );
        assert_eq!(
            combo.pressed(),
            &[sym(KeyCode::KEY_TAB), sym(KeyCode::KEY_LEFTSHIFT)]
        );
    }

    #[test]
    fn derive_is_idempotent() {
        let presses = [sym(KeyCode::KEY_D), sym(KeyCode::KEY_A)];
        let releases = [sym(KeyCode::KEY_TAB), sym(KeyCode::KEY_TAB)];
        assert_eq!(
            ComboState::derive(&presses, &releases),
            ComboState::derive(&presses, &releases)
        );
    }

    #[test]
    fn pressed_is_ignores_argument_order() {
        let combo = ComboState::derive(
            &[
                sym(KeyCode::KEY_LEFTSHIFT),
                sym(KeyCode::KEY_TAB),
                sym(KeyCode::KEY_D),
            ],
            &[],
        );

        assert!(combo.pressed_is(&[
            sym(KeyCode::KEY_D),
            sym(KeyCode::KEY_LEFTSHIFT),
            sym(KeyCode::KEY_TAB),
        ]));
        assert!(!combo.pressed_is(&[sym(KeyCode::KEY_D), sym(KeyCode::KEY_TAB)]));
    }

    #[test]
    fn released_is_counts_duplicates() {
        let combo = ComboState::derive(&[], &[sym(KeyCode::KEY_A), sym(KeyCode::KEY_A)]);
        assert!(combo.released_is(&[sym(KeyCode::KEY_A), sym(KeyCode::KEY_A)]));
        assert!(!combo.released_is(&[sym(KeyCode::KEY_A)]));
    }

    #[test]
    fn held_checks_membership() {
        let combo = ComboState::derive(&[sym(KeyCode::KEY_TAB)], &[]);
        assert!(combo.held(sym(KeyCode::KEY_TAB)));
        assert!(!combo.held(sym(KeyCode::KEY_A)));
    }
}
