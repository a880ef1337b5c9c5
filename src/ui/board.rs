//! Glue between core boards and the reactive tree
//!
//! Boards live in a `StoredValue`; views read the board's state signal and
//! re-render on every change.

use std::future::Future;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::core::board::{Board, Collection, StateOf, entered_authenticated};
use crate::core::session::SessionStatus;
use crate::ui::session::{ClientTransport, use_session};

/// A board as held by a page
pub type PageBoard<C> = StoredValue<Board<C, ClientTransport>>;

/// Board state as seen by a view
pub type BoardView<C> = Signal<StateOf<C>>;

/// Store the board and hand out its state signal
pub fn mount_board<C>(board: Board<C, ClientTransport>) -> (PageBoard<C>, BoardView<C>)
where
    C: Collection,
    StateOf<C>: Clone + Send + Sync + 'static,
{
    let state = Signal::from(board.state_signal());
    (StoredValue::new(board), state)
}

/// Run `load` whenever the session becomes Authenticated, including when the
/// page mounts on an already authenticated session.
pub fn load_on_sign_in(load: impl Fn() + Send + Sync + 'static) {
    let session = use_session();
    Effect::new(move |previous: Option<SessionStatus>| {
        let current = session.status();
        let due = match previous {
            Some(previous) => entered_authenticated(previous, current),
            None => current == SessionStatus::Authenticated,
        };
        if due {
            load();
        }
        current
    });
}

/// Spawn a board operation; its outcome is already in the board state, so
/// only the log sees the result here.
pub fn spawn_board<C, F, Fut, R>(board: PageBoard<C>, action: &'static str, op: F)
where
    C: Collection,
    F: FnOnce(Board<C, ClientTransport>) -> Fut + 'static,
    Fut: Future<Output = Result<R, crate::core::ApiError>> + 'static,
    R: 'static,
{
    let board = board.get_value();
    spawn_local(async move {
        if let Err(e) = op(board).await {
            leptos::logging::log!("{} {} failed: {}", C::NOUN, action, e);
        }
    });
}
