use super::menu::{MenuEntry, MenuKey, MenuNode};

/// One level of navigation depth
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationFrame {
    pub menu: MenuKey,
    pub selected: usize,
}

impl NavigationFrame {
    fn new(menu: MenuKey) -> Self {
        Self { menu, selected: 0 }
    }
}

/// Stack of visited menus. The root frame is stored apart from the rest so
/// the stack can never be emptied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationStack {
    root: NavigationFrame,
    above: Vec<NavigationFrame>,
}

impl Default for NavigationStack {
    fn default() -> Self {
        Self::new()
    }
}

impl NavigationStack {
    pub fn new() -> Self {
        Self {
            root: NavigationFrame::new(MenuKey::Root),
            above: Vec::new(),
        }
    }

    /// The frame currently on screen
    pub fn top(&self) -> &NavigationFrame {
        self.above.last().unwrap_or(&self.root)
    }

    fn top_mut(&mut self) -> &mut NavigationFrame {
        self.above.last_mut().unwrap_or(&mut self.root)
    }

    pub fn depth(&self) -> usize {
        self.above.len() + 1
    }

    pub fn frames(&self) -> impl Iterator<Item = &NavigationFrame> {
        std::iter::once(&self.root).chain(self.above.iter())
    }

    pub fn current_node(&self) -> MenuNode<'_> {
        self.top().menu.node()
    }

    /// The highlighted item of the current menu, if it has any items
    pub fn selected_entry(&self) -> Option<MenuEntry> {
        let frame = self.top();
        frame.menu.node().items.get(frame.selected).copied()
    }

    pub fn is_at(&self, menu: &MenuKey) -> bool {
        self.top().menu == *menu
    }

    pub fn push(&mut self, menu: MenuKey) {
        self.above.push(NavigationFrame::new(menu));
    }

    /// Drop the top frame. Returns false when already at the root.
    pub fn pop(&mut self) -> bool {
        self.above.pop().is_some()
    }

    /// Highlight `index` in the current menu. Out-of-range indices are ignored.
    pub fn set_selected(&mut self, index: usize) -> bool {
        if index >= self.current_node().len() {
            return false;
        }
        self.top_mut().selected = index;
        true
    }

    pub fn wheel_up(&mut self) -> bool {
        self.step_selection(-1)
    }

    pub fn wheel_down(&mut self) -> bool {
        self.step_selection(1)
    }

    fn step_selection(&mut self, delta: isize) -> bool {
        let len = self.current_node().len();
        if len == 0 {
            return false;
        }
        let frame = self.top_mut();
        frame.selected = (frame.selected as isize + delta).rem_euclid(len as isize) as usize;
        true
    }
}
