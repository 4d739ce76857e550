//! Gestures raised by the group views.

/// Group gestures handed to the controller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GroupAction {
    /// Tab clicked.
    Select(String),
    /// Name field edited.
    Rename {
        /// Group id.
        group_id: String,
        /// New name as typed.
        name: String,
    },
    /// Album dropdown changed; empty means cleared.
    ChangeAlbum {
        /// Group id.
        group_id: String,
        /// Album id or empty.
        album: String,
    },
    /// Random-order checkbox toggled.
    SetRandom {
        /// Group id.
        group_id: String,
        /// New flag.
        random: bool,
    },
    /// Delete button pressed.
    Delete(String),
    /// Member row Remove button pressed.
    RemoveMember(String),
    /// `+` tab pressed.
    OpenModal,
    /// Modal name field edited.
    ModalInput(String),
    /// Modal dismissed.
    CloseModal,
    /// Modal confirmed (Add button or Enter).
    ConfirmCreate,
}
