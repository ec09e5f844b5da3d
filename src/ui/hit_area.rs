//! Clickable regions registered while rendering and queried on mouse events.

use ratatui::layout::Rect;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickAction {
    /// Select-all checkbox in the header row.
    ToggleSelectAll,
    /// Header cell of the column with this key.
    ActivateHeader(String),
    /// Checkbox of the row displayed at this position.
    ToggleRow(usize),
    /// Anywhere else on the row displayed at this position.
    FocusRow(usize),
}

#[derive(Debug, Clone)]
pub struct HitArea {
    pub rect: Rect,
    pub action: ClickAction,
}

impl HitArea {
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.rect.x
            && x < self.rect.x.saturating_add(self.rect.width)
            && y >= self.rect.y
            && y < self.rect.y.saturating_add(self.rect.height)
    }
}

/// Hit areas of the last frame. Cleared at the start of every render.
#[derive(Debug, Default)]
pub struct HitAreaRegistry {
    areas: Vec<HitArea>,
}

impl HitAreaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.areas.clear();
    }

    pub fn register(&mut self, rect: Rect, action: ClickAction) {
        if rect.width > 0 && rect.height > 0 {
            self.areas.push(HitArea { rect, action });
        }
    }

    /// Topmost area containing the point; later registrations win.
    pub fn hit_test(&self, x: u16, y: u16) -> Option<&ClickAction> {
        self.areas
            .iter()
            .rev()
            .find(|area| area.contains(x, y))
            .map(|area| &area.action)
    }

    pub fn len(&self) -> usize {
        self.areas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }
}
