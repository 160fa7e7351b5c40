//! Side-by-side panel pair with a single active panel.
//!
//! [`DualPanelCoordinator`] owns up to two [`PanelState`]s and an explicit
//! [`Side`] naming the one that receives input. It holds no directory state
//! of its own; every navigation command is forwarded to the active panel.

use std::path::{Path, PathBuf};

use crate::config::settings::Config;
use crate::error::{CoreError, CoreResult};
use crate::event::{Command, Event};
use crate::fs::ops::create_directory;
use crate::nav::layout::{split, Region, Split};
use crate::nav::panel::{default_start_dir, Activation, PanelState, Row};
use crate::paths::PathStyle;

/// Which half of the pair a panel occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// The opposite side.
    pub fn other(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// Lowercase name, as used in log fields.
    pub fn as_str(self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

#[derive(Debug, Clone)]
struct Slot {
    panel: PanelState,
    selectable: bool,
}

/// Two panels and the handle of the active one.
///
/// A side is absent when the region had no room for it. `active` always
/// names a side that exists, and is `None` only when neither does.
#[derive(Debug, Clone)]
pub struct DualPanelCoordinator {
    left: Option<Slot>,
    right: Option<Slot>,
    active: Option<Side>,
    split: Split,
}

impl DualPanelCoordinator {
    /// Builds the pair with both panels in the working directory.
    pub fn new(region: Region) -> Self {
        let start = default_start_dir();
        Self::build(region, &start, &start, PathStyle::native())
    }

    /// Builds the pair using the start directories and path style from `config`.
    pub fn from_config(region: Region, config: &Config) -> Self {
        let fallback = default_start_dir();
        let left_dir = config.general.dir_for(Side::Left).unwrap_or(fallback.as_path());
        let right_dir = config.general.dir_for(Side::Right).unwrap_or(fallback.as_path());
        Self::build(region, left_dir, right_dir, config.paths.style())
    }

    /// Builds the pair with explicit start directories.
    pub fn with_dirs(region: Region, left_dir: &Path, right_dir: &Path, style: PathStyle) -> Self {
        Self::build(region, left_dir, right_dir, style)
    }

    fn build(region: Region, left_dir: &Path, right_dir: &Path, style: PathStyle) -> Self {
        let split = split(region);
        tracing::debug!("building panels for {region:?}: {split:?}");

        let make_slot = |side: Side, dir: &Path, height: i32| {
            let _span = tracing::debug_span!("panel", side = side.as_str()).entered();
            Slot {
                panel: PanelState::with_style(dir, height, style),
                selectable: true,
            }
        };

        let left = split.left.map(|g| make_slot(Side::Left, left_dir, g.height));
        if left.is_none() {
            tracing::debug!("left panel not created: no room");
        }
        let right = split.right.map(|g| make_slot(Side::Right, right_dir, g.height));
        if right.is_none() {
            tracing::debug!("right panel not created: no room");
        }

        let active = if right.is_some() {
            Some(Side::Right)
        } else if left.is_some() {
            Some(Side::Left)
        } else {
            None
        };

        Self {
            left,
            right,
            active,
            split,
        }
    }

    fn slot(&self, side: Side) -> Option<&Slot> {
        match side {
            Side::Left => self.left.as_ref(),
            Side::Right => self.right.as_ref(),
        }
    }

    fn slot_mut(&mut self, side: Side) -> &mut Option<Slot> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    /// Returns the panel on `side`, if it was created.
    pub fn panel(&self, side: Side) -> Option<&PanelState> {
        self.slot(side).map(|s| &s.panel)
    }

    /// Returns the side currently receiving input.
    pub fn active_side(&self) -> Option<Side> {
        self.active
    }

    /// Returns the panel currently receiving input.
    pub fn active_panel(&self) -> Option<&PanelState> {
        self.active.and_then(|side| self.panel(side))
    }

    /// Returns the current split of the region.
    pub fn layout(&self) -> &Split {
        &self.split
    }

    /// Returns `true` if `side` exists and may take focus.
    pub fn is_selectable(&self, side: Side) -> bool {
        self.slot(side).is_some_and(|s| s.selectable)
    }

    /// Marks `side` as eligible (or not) for focus. No-op for a missing side.
    pub fn with_selectable(mut self, side: Side, selectable: bool) -> Self {
        if let Some(slot) = self.slot_mut(side) {
            slot.selectable = selectable;
        }
        self
    }

    /// Hands focus to the other panel.
    ///
    /// Falls back to re-activating whichever side is eligible when the
    /// other one is missing or not selectable. No-op if neither is.
    pub fn swap_active(self) -> Self {
        let next = match self.active {
            Some(side) if self.is_selectable(side.other()) => side.other(),
            _ if self.is_selectable(Side::Left) => Side::Left,
            _ if self.is_selectable(Side::Right) => Side::Right,
            _ => return self,
        };
        tracing::debug!("active panel: {}", next.as_str());
        Self {
            active: Some(next),
            ..self
        }
    }

    /// Applies `f` to the panel on `side`, returning its extra output.
    ///
    /// Returns `None` (and leaves everything untouched) for a missing side.
    fn update<T>(
        mut self,
        side: Side,
        f: impl FnOnce(PanelState) -> (PanelState, T),
    ) -> (Self, Option<T>) {
        let Some(Slot { panel, selectable }) = self.slot_mut(side).take() else {
            return (self, None);
        };
        let span = tracing::debug_span!("panel", side = side.as_str());
        let (panel, out) = span.in_scope(|| f(panel));
        *self.slot_mut(side) = Some(Slot { panel, selectable });
        (self, Some(out))
    }

    /// Applies `f` to the active panel. No-op without one.
    pub fn with_active_panel(self, f: impl FnOnce(PanelState) -> PanelState) -> Self {
        let Some(side) = self.active else {
            return self;
        };
        self.update(side, |panel| (f(panel), ())).0
    }

    /// Handles one input command.
    pub fn dispatch(self, command: Command) -> (Self, Option<Event>) {
        if command == Command::SwapActivePanel {
            let before = self.active;
            let next = self.swap_active();
            let event = match next.active {
                Some(side) if next.active != before => Some(Event::ActivePanelChanged(side)),
                _ => None,
            };
            return (next, event);
        }

        let Some(side) = self.active else {
            return (self, None);
        };

        let (next, event) = self.update(side, |panel| {
            let before = panel.current_dir().to_path_buf();
            let loaded = |panel: &PanelState| Event::DirectoryLoaded {
                side,
                path: panel.current_dir().to_path_buf(),
            };
            match command {
                Command::FocusUp => (panel.move_up(), None),
                Command::FocusDown => (panel.move_down(), None),
                Command::FocusFirst => (panel.go_to_first(), None),
                Command::FocusLast => (panel.go_to_last(), None),
                Command::PageUp => (panel.page_up(), None),
                Command::PageDown => (panel.page_down(), None),
                Command::Refresh => {
                    let panel = panel.refresh();
                    let event = loaded(&panel);
                    (panel, Some(event))
                }
                Command::GoToParent => {
                    let panel = panel.go_up();
                    let event = (panel.current_dir() != before).then(|| loaded(&panel));
                    (panel, event)
                }
                Command::Activate => {
                    let (panel, activation) = panel.execute_focused();
                    let event = match activation {
                        Activation::Navigated => Some(loaded(&panel)),
                        Activation::File(path) => Some(Event::FileActivated { side, path }),
                        Activation::Nothing => None,
                    };
                    (panel, event)
                }
                Command::SwapActivePanel => (panel, None),
            }
        });
        (next, event.flatten())
    }

    /// Re-splits a new region and resizes existing panels to it.
    ///
    /// Panels are never created or dropped here; a side that no longer fits
    /// keeps its panel with the region height, clamped like any other
    /// non-positive viewport.
    pub fn resize(self, region: Region) -> Self {
        let split = split(region);
        let left_height = split.left.map_or(region.height, |g| g.height);
        let right_height = split.right.map_or(region.height, |g| g.height);

        let (next, _) = self.update(Side::Left, |p| (p.with_viewport_height(left_height), ()));
        let (next, _) = next.update(Side::Right, |p| (p.with_viewport_height(right_height), ()));
        Self { split, ..next }
    }

    /// Creates directory `name` inside the active panel's directory and
    /// reloads that panel.
    ///
    /// Returns the updated pair and the new directory's path. Borrows `self`,
    /// so on error the caller still holds the unchanged coordinator.
    ///
    /// # Errors
    ///
    /// - [`CoreError::NoActivePanel`] if no panel exists.
    /// - Any error from [`create_directory`]; the panel is left as it was.
    pub fn create_directory(&self, name: &str) -> CoreResult<(Self, PathBuf)> {
        let side = self.active.ok_or(CoreError::NoActivePanel)?;
        let parent = self
            .panel(side)
            .ok_or(CoreError::NoActivePanel)?
            .current_dir()
            .to_path_buf();

        let created = create_directory(&parent, name).inspect_err(|e| {
            tracing::warn!("failed to create {name:?} in {}: {e}", parent.display());
        })?;

        let (next, _) = self.clone().update(side, |panel| (panel.reload(&parent), ()));
        Ok((next, created))
    }

    /// The visible rows of `side`. Only the active panel flags a focus row.
    pub fn rows(&self, side: Side) -> impl Iterator<Item = Row<'_>> + '_ {
        let active = self.active == Some(side);
        self.panel(side)
            .into_iter()
            .flat_map(move |panel| panel.rows(active))
    }
}
