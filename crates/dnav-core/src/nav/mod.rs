//! Navigation logic.
//!
//! [`panel::PanelState`] tracks focus and scrolling over one listing,
//! [`layout`] splits the screen between two panels, and
//! [`dual::DualPanelCoordinator`] routes commands to whichever is active.

pub mod dual;
pub mod layout;
pub mod panel;
