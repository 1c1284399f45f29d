//! Active sprite-sheet slot.
//!
//! One [`SheetSlot`] exists per stage entity and holds the sheet of the
//! currently selected clip. Decoding happens outside the engine; the
//! collaborator reports completion with the [`SheetTicket`] it was handed at
//! selection time. A completion carrying a stale ticket belongs to a sheet
//! that has since been replaced and must be ignored, otherwise a late decode
//! could flag a different sheet as drawable.

use bevy_ecs::prelude::Component;

/// Identity of one sheet load request.
///
/// Compared by value; a new ticket is issued every time a clip is selected,
/// including re-selection of the same clip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SheetTicket(pub u64);

/// The sprite sheet backing the active clip.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct SheetSlot {
    /// Resolved asset path of the sheet image.
    pub path: String,
    /// Ticket identifying this slot's pending (or finished) load.
    pub ticket: SheetTicket,
    /// False until the collaborator reports decode completion.
    pub loaded: bool,
}

impl SheetSlot {
    pub fn new(path: impl Into<String>, ticket: SheetTicket) -> Self {
        SheetSlot {
            path: path.into(),
            ticket,
            loaded: false,
        }
    }

    /// Mark the sheet as decoded if `ticket` still identifies this slot.
    ///
    /// Returns true when the completion was accepted.
    pub fn complete(&mut self, ticket: SheetTicket) -> bool {
        if ticket != self.ticket {
            return false;
        }
        self.loaded = true;
        true
    }
}
