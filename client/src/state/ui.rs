//! Local UI chrome state: active theme and the collapsed navbar menu.
//!
//! Nothing here is persisted directly. The theme preference is stored by
//! `util::theme`.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::util::theme::Theme;

#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub theme: Theme,
    pub menu_open: bool,
}
