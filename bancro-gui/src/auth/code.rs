pub const CODE_LENGTH: usize = 6;

/// The segmented verification code being typed by the user.
///
/// Each slot holds either the empty string or exactly one ASCII digit;
/// every other candidate edit is rejected without touching the state.
#[derive(Debug, Clone, Default)]
pub struct VerificationCode {
    slots: [String; CODE_LENGTH],
    started: bool,
}

impl VerificationCode {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies a candidate edit to the given slot.
    ///
    /// Returns the index of the slot that should receive focus next, if
    /// the edit was an accepted digit in a non-terminal slot. The caller
    /// wires that intent to the focus primitive of the UI layer.
    pub fn edit(&mut self, index: usize, value: &str) -> Option<usize> {
        if index >= CODE_LENGTH || !accepts(value) {
            return None;
        }
        self.slots[index] = value.to_string();
        if !value.is_empty() {
            self.started = true;
            if index < CODE_LENGTH - 1 {
                return Some(index + 1);
            }
        }
        None
    }

    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(|slot| !slot.is_empty())
    }

    /// Filler character shown in every slot until the user starts typing.
    pub fn placeholder(&self) -> &'static str {
        if self.started {
            ""
        } else {
            "0"
        }
    }

    pub fn slots(&self) -> &[String] {
        &self.slots
    }

    pub fn value(&self) -> String {
        self.slots.concat()
    }
}

// Accepts the empty string (clearing a slot) or a single ASCII digit.
fn accepts(value: &str) -> bool {
    value.is_empty() || (value.len() == 1 && value.bytes().all(|b| b.is_ascii_digit()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn six_digits_complete_the_code() {
        let mut code = VerificationCode::new();
        for (i, digit) in ["1", "2", "3", "4", "5", "6"].iter().enumerate() {
            assert!(!code.is_complete());
            code.edit(i, digit);
        }
        assert!(code.is_complete());
        assert_eq!(code.value(), "123456");
    }

    #[test]
    fn any_empty_slot_is_incomplete() {
        for hole in 0..CODE_LENGTH {
            let mut code = VerificationCode::new();
            for i in 0..CODE_LENGTH {
                if i != hole {
                    code.edit(i, "7");
                }
            }
            assert!(!code.is_complete());
        }
    }

    #[test]
    fn non_digits_are_rejected() {
        let mut code = VerificationCode::new();
        code.edit(0, "5");
        for candidate in ["a", "é", " ", "-", "12", "5a", "①"] {
            assert_eq!(code.edit(0, candidate), None);
            assert_eq!(code.slots()[0], "5");
        }
        // Rejections must not clear the placeholder state either.
        let mut untouched = VerificationCode::new();
        assert_eq!(untouched.edit(2, "x"), None);
        assert_eq!(untouched.placeholder(), "0");
    }

    #[test]
    fn accepted_digit_moves_focus_forward() {
        let mut code = VerificationCode::new();
        for i in 0..CODE_LENGTH - 1 {
            assert_eq!(code.edit(i, "9"), Some(i + 1));
        }
        // The terminal slot produces no focus intent.
        assert_eq!(code.edit(CODE_LENGTH - 1, "9"), None);
    }

    #[test]
    fn clearing_a_slot_produces_no_focus_intent() {
        let mut code = VerificationCode::new();
        code.edit(3, "4");
        assert_eq!(code.edit(3, ""), None);
        assert_eq!(code.slots()[3], "");
    }

    #[test]
    fn out_of_range_slot_is_ignored() {
        let mut code = VerificationCode::new();
        assert_eq!(code.edit(CODE_LENGTH, "1"), None);
        assert!(code.slots().iter().all(|s| s.is_empty()));
    }

    #[test]
    fn placeholder_clears_after_first_digit_anywhere() {
        let mut code = VerificationCode::new();
        assert_eq!(code.placeholder(), "0");
        code.edit(4, "2");
        assert_eq!(code.placeholder(), "");
        // Clearing the slot again does not bring the filler back.
        code.edit(4, "");
        assert_eq!(code.placeholder(), "");
    }
}
