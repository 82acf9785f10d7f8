//! Transient anchored UI surfaces: contextual row menus and the settings
//! popup. Anchored positions are captured once at open time and do not track
//! scrolling, so a scroll closes any open row menu rather than leave it
//! floating at a stale position.

/// On-screen rectangle of the trigger element an overlay is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AnchorRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl AnchorRect {
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Offsets measured from the bottom-right viewport corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CornerOffsets {
    pub bottom: f64,
    pub right: f64,
}

const ROW_MENU_GAP: f64 = 8.0;
const SETTINGS_GAP: f64 = 10.0;

/// A row menu sits to the left of its trigger, top-aligned with it.
pub fn row_menu_position(anchor: AnchorRect, menu: Size) -> Point {
    Point {
        x: anchor.left - menu.width - ROW_MENU_GAP,
        y: anchor.top,
    }
}

/// The settings popup hangs above its trigger, right edges aligned.
pub fn settings_offsets(anchor: AnchorRect, viewport: Viewport) -> CornerOffsets {
    CornerOffsets {
        bottom: viewport.height - anchor.top + SETTINGS_GAP,
        right: viewport.width - anchor.right() - SETTINGS_GAP,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayKind {
    RowMenu,
    Settings,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OpenOverlay {
    /// Identifies the trigger element, e.g. the job id for a row menu.
    pub trigger: String,
    pub anchor: AnchorRect,
}

/// At most one open instance per kind; opening from a second trigger closes
/// the first of the same kind. Kinds are independent of each other.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OverlayCoordinator {
    row_menu: Option<OpenOverlay>,
    settings: Option<OpenOverlay>,
}

impl OverlayCoordinator {
    pub fn open(&mut self, kind: OverlayKind, trigger: impl Into<String>, anchor: AnchorRect) {
        let overlay = OpenOverlay {
            trigger: trigger.into(),
            anchor,
        };
        match kind {
            OverlayKind::RowMenu => self.row_menu = Some(overlay),
            OverlayKind::Settings => self.settings = Some(overlay),
        }
    }

    pub fn close(&mut self, kind: OverlayKind) {
        match kind {
            OverlayKind::RowMenu => self.row_menu = None,
            OverlayKind::Settings => self.settings = None,
        }
    }

    /// A pointer interaction outside every overlay and trigger closes
    /// everything that is open.
    pub fn close_all(&mut self) {
        self.row_menu = None;
        self.settings = None;
    }

    /// Scroll anywhere invalidates row-menu anchors; the settings trigger
    /// does not live in a scrolling container.
    pub fn scrolled(&mut self) {
        self.row_menu = None;
    }

    pub fn is_open(&self, kind: OverlayKind) -> bool {
        self.open_overlay(kind).is_some()
    }

    pub fn open_overlay(&self, kind: OverlayKind) -> Option<&OpenOverlay> {
        match kind {
            OverlayKind::RowMenu => self.row_menu.as_ref(),
            OverlayKind::Settings => self.settings.as_ref(),
        }
    }
}
