//! Panel state plumbing
//!
//! Panel states are plain values with reducer methods that consume the
//! current state and return the next one. These helpers run a reducer
//! against the signal holding the state.

pub mod request_seq;

pub use request_seq::{RequestSeq, Ticket};

use leptos::prelude::*;

/// Runs a reducer that also yields a value (e.g. the ticket of a request it
/// decided to issue). Returns `None` if the signal was disposed.
pub fn dispatch<Sig, S, R>(signal: Sig, reducer: impl FnOnce(S) -> (S, R)) -> Option<R>
where
    Sig: Update<Value = S>,
    S: Default,
{
    signal.try_update(|state| {
        let (next, out) = reducer(std::mem::take(state));
        *state = next;
        out
    })
}

/// Runs a reducer that only produces the next state
pub fn apply<Sig, S>(signal: Sig, reducer: impl FnOnce(S) -> S)
where
    Sig: Update<Value = S>,
    S: Default,
{
    signal.update(|state| *state = reducer(std::mem::take(state)));
}
