//! Random-input quiz: drive a small state machine until it hits its error
//! state.
//!
//! Each iteration draws one character from `[({ ax})]` and a six-character
//! string over `r`, `e`, `s`, `t` and NUL. The characters `[ ( {`, space,
//! `a x } ) ]` advance the machine one state each when they arrive in that
//! order. In state 9 the string `"reset"` followed by NUL triggers the error.

use tracing::trace;

use crate::core::GameRng;

const INPUT_CHARS: [char; 9] = ['[', '(', '{', ' ', 'a', 'x', '}', ')', ']'];

const STRING_CHARS: [char; 5] = ['r', 'e', 's', 't', '\0'];

/// The input string that triggers the error in the final state.
const TRIGGER: [char; 6] = ['r', 'e', 's', 'e', 't', '\0'];

/// State reached after the whole bracket sequence.
pub const FINAL_STATE: u8 = 9;

pub fn input_char(rng: &mut GameRng) -> char {
    INPUT_CHARS[rng.gen_range(0..INPUT_CHARS.len())]
}

pub fn input_string(rng: &mut GameRng) -> [char; 6] {
    std::array::from_fn(|_| STRING_CHARS[rng.gen_range(0..STRING_CHARS.len())])
}

/// Next state after reading `c`.
#[must_use]
pub fn advance(state: u8, c: char) -> u8 {
    match (state, c) {
        (0, '[') => 1,
        (1, '(') => 2,
        (2, '{') => 3,
        (3, ' ') => 4,
        (4, 'a') => 5,
        (5, 'x') => 6,
        (6, '}') => 7,
        (7, ')') => 8,
        (8, ']') => FINAL_STATE,
        _ => state,
    }
}

#[must_use]
pub fn is_error(state: u8, s: &[char; 6]) -> bool {
    state == FINAL_STATE && *s == TRIGGER
}

/// Run the quiz for at most `max_iterations`. Returns the 1-based iteration
/// that reached the error state.
pub fn run(seed: u64, max_iterations: usize) -> Option<usize> {
    let mut rng = GameRng::new(seed);
    let mut state = 0;
    for iteration in 1..=max_iterations {
        let c = input_char(&mut rng);
        let s = input_string(&mut rng);
        trace!(
            iteration,
            ?c,
            s = %s.iter().collect::<String>().escape_default(),
            state,
            "quiz step"
        );

        state = advance(state, c);
        if is_error(state, &s) {
            return Some(iteration);
        }
    }
    None
}
