//! dnav core library — panel model and navigation engine.
//!
//! `dnav-core` holds the state behind a dual-pane, keyboard-driven file
//! browser: directory listings, focus and scrolling, directory changes that
//! restore focus on the way back up, and the pair of panels with a single
//! active side. It does no drawing; a host UI renders [`Row`]s and feeds
//! [`Command`]s back in.
//!
//! # Modules
//!
//! - [`paths`] — Path arithmetic behind one [`PathStyle`]: normalisation, parent, base name, root detection.
//! - [`fs`] — [`Entry`], the raw directory read, directory creation, and [`DirectorySnapshot`].
//! - [`nav`] — [`PanelState`], region [`layout`](nav::layout), and the [`DualPanelCoordinator`].
//! - [`event`] — [`Command`]s in, [`Event`]s out.
//! - [`config`] — TOML configuration ([`Config`]).
//! - [`logging`] — Log file setup with an explicit [`LogGuard`].
//! - [`error`] — Unified error type ([`CoreError`]) and result alias ([`CoreResult`]).

pub mod config;
pub mod error;
pub mod event;
pub mod fs;
pub mod logging;
pub mod nav;
pub mod paths;

pub use config::settings::Config;
pub use error::{CoreError, CoreResult};
pub use event::{Command, Event};
pub use fs::entry::{Entry, EntryKind};
pub use fs::ops::{create_directory, read_directory};
pub use fs::snapshot::DirectorySnapshot;
pub use logging::LogGuard;
pub use nav::dual::{DualPanelCoordinator, Side};
pub use nav::layout::{PanelGeometry, Region, Split};
pub use nav::panel::{default_start_dir, Activation, PanelState, Row};
pub use paths::{PathStyle, PARENT_TOKEN};

/// Normalises a string to NFC (composed) form.
///
/// macOS stores filenames in NFD (decomposed), which would otherwise make
/// name comparisons fail for accented and Hangul names.
pub fn nfc_string(s: &str) -> String {
    use unicode_normalization::UnicodeNormalization;
    s.nfc().collect()
}
