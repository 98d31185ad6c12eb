#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScreenRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

/// Top-left position that centres a dialog over `parent` (or the screen when
/// there is no parent) while keeping it on `screen`.
pub fn center_dialog(dialog: Size, parent: Option<ScreenRect>, screen: ScreenRect) -> (i32, i32) {
    let anchor = parent.unwrap_or(screen);
    let x = anchor.x + (anchor.width - dialog.width) / 2;
    let y = anchor.y + (anchor.height - dialog.height) / 2;
    let max_x = (screen.x + screen.width - dialog.width).max(screen.x);
    let max_y = (screen.y + screen.height - dialog.height).max(screen.y);
    (x.clamp(screen.x, max_x), y.clamp(screen.y, max_y))
}
