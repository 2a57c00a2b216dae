//! Pointer gesture translation
//!
//! Both click-click and drag-and-drop move a piece:
//!
//! | Event        | State            | Action                       |
//! |--------------|------------------|------------------------------|
//! | pointer down | idle             | pick up the square           |
//! | pointer down | holding          | drop on the square           |
//! | pointer up   | holding `origin` | drop, unless still on origin |
//! | pointer up   | idle             | nothing                      |
//!
//! Releasing over the origin square keeps the piece in hand, which is what
//! turns a plain click into the first half of a click-click move.

use crate::game::interaction::InteractionState;
use shakmaty::Square;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerPhase {
    Down,
    Up,
}

/// What the interaction state machine should do with a pointer event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerAction {
    PickUp(Square),
    Drop(Square),
    Ignore,
}

/// Translate a pointer event over `square` into an action
pub fn pointer_action(phase: PointerPhase, square: Square, state: InteractionState) -> PointerAction {
    match (phase, state) {
        (PointerPhase::Down, InteractionState::Idle) => PointerAction::PickUp(square),
        (PointerPhase::Down, InteractionState::Holding(_)) => PointerAction::Drop(square),
        (PointerPhase::Up, InteractionState::Holding(origin)) if origin != square => {
            PointerAction::Drop(square)
        }
        (PointerPhase::Up, _) => PointerAction::Ignore,
    }
}
