//! Commands and events exchanged between a host UI and the core.
//!
//! The host translates key presses into [`Command`]s and hands them to
//! [`DualPanelCoordinator::dispatch`](crate::DualPanelCoordinator::dispatch),
//! which answers with an optional [`Event`] describing what changed.

use std::path::PathBuf;

use crate::nav::dual::Side;

/// An abstract input the core knows how to handle.
///
/// Commands flow **host → core**. Every variant except
/// [`SwapActivePanel`](Command::SwapActivePanel) is routed to the active panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move focus up by one entry.
    FocusUp,
    /// Move focus down by one entry.
    FocusDown,
    /// Jump to the first entry.
    FocusFirst,
    /// Jump to the last entry.
    FocusLast,
    /// Move focus up by one viewport.
    PageUp,
    /// Move focus down by one viewport.
    PageDown,
    /// Activate the focused entry (Enter).
    Activate,
    /// Go to the parent directory.
    GoToParent,
    /// Hand focus to the other panel (Tab).
    SwapActivePanel,
    /// Re-read the active panel's directory.
    Refresh,
}

/// A notification the core returns after handling a [`Command`].
///
/// Events flow **core → host**. Pure focus moves produce no event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A panel loaded a (possibly different) directory.
    DirectoryLoaded {
        /// The panel that reloaded.
        side: Side,
        /// The directory now displayed.
        path: PathBuf,
    },
    /// A file was activated. The core does nothing further with it.
    FileActivated {
        /// The panel the file is listed in.
        side: Side,
        /// Full path of the file.
        path: PathBuf,
    },
    /// Focus moved to the other panel.
    ActivePanelChanged(Side),
}
