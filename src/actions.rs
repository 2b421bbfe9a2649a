//! User actions produced by the key map and consumed by `App::dispatch`.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    Quit,
    Char(char),
    Launch,

    DeleteBack,
    DeleteForward,
    DeleteWordBack,
    DeleteWordForward,
    DeleteToEnd,
    ClearInput,
    Paste,

    MoveLeft,
    MoveRight,
    MoveWordLeft,
    MoveWordRight,
    MoveStart,
    MoveEnd,

    ListUp,
    ListDown,
}

impl Action {
    /// Actions that auto-repeat while their key is held.
    pub fn repeats(self) -> bool {
        !matches!(self, Action::Quit | Action::Char(_) | Action::Launch)
    }
}
