//! GameView: maps a [`GameSnapshot`] plus per-cell animation frames into a
//! terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Animation frames carry pixel offsets relative to the board's top-left
//! corner (one tile is `cell_side` pixels); they are scaled to terminal cells
//! here. Tiles are clipped to the board interior, except while they fly off
//! during the game-over animation.

use crate::core::{AnimationFrame, CellView, GameSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{BoardGeometry, Color, Phase, BOARD_VARIANTS, DEFAULT_CELL_SIDE, MAX_COLORS};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

const BOARD_BG: Rgb = Rgb::new(30, 30, 40);
const TEXT: CellStyle = CellStyle::plain(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0));
const BORDER: CellStyle = CellStyle::plain(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

/// Tile colors, indexed by `Color`. Index 0 is unused.
const PALETTE: [Rgb; MAX_COLORS as usize + 1] = [
    Rgb::new(0, 0, 0),
    Rgb::new(68, 68, 255),
    Rgb::new(255, 68, 68),
    Rgb::new(68, 255, 68),
    Rgb::new(187, 0, 187),
    Rgb::new(255, 255, 68),
    Rgb::new(68, 255, 255),
    Rgb::new(255, 136, 68),
    Rgb::new(170, 170, 170),
];

/// Display color of a tile color.
pub fn palette(color: Color) -> Rgb {
    match PALETTE.get(color as usize) {
        Some(rgb) if color != 0 => *rgb,
        _ => Rgb::new(128, 128, 128),
    }
}

/// Screen rectangle in terminal cells, used for clipping.
#[derive(Debug, Clone, Copy)]
struct Rect {
    x: i32,
    y: i32,
    w: i32,
    h: i32,
}

impl Rect {
    fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && y >= self.y && x < self.x + self.w && y < self.y + self.h
    }
}

/// A lightweight terminal renderer for the match-3 board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameView {
    /// Tile width in terminal columns.
    cell_w: u16,
    /// Tile height in terminal rows.
    cell_h: u16,
    /// Tile size in animation pixels.
    cell_side: i32,
}

impl Default for GameView {
    fn default() -> Self {
        // 4x2 keeps tiles roughly square on typical terminal fonts.
        Self {
            cell_w: 4,
            cell_h: 2,
            cell_side: DEFAULT_CELL_SIDE,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            ..Self::default()
        }
    }

    /// Pixel size of one tile in the animation frames.
    pub fn with_cell_side(mut self, cell_side: i32) -> Self {
        self.cell_side = cell_side.max(1);
        self
    }

    /// Where the board lands in `viewport`; the default geometry if no game
    /// is running.
    pub fn geometry(&self, snap: &GameSnapshot, viewport: Viewport) -> BoardGeometry {
        if snap.width == 0 || snap.height == 0 {
            return BoardGeometry::default();
        }
        let (frame_w, frame_h) = self.frame_size(snap);
        BoardGeometry {
            origin_x: viewport.width.saturating_sub(frame_w) / 2 + 1,
            origin_y: viewport.height.saturating_sub(frame_h) / 2 + 1,
            cell_w: self.cell_w,
            cell_h: self.cell_h,
            width: snap.width,
            height: snap.height,
        }
    }

    /// Render into a new framebuffer.
    pub fn render(
        &self,
        snap: &GameSnapshot,
        frames: &[Option<AnimationFrame>],
        cursor: Option<(usize, usize)>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, frames, cursor, viewport, &mut fb);
        fb
    }

    /// Render into an existing framebuffer.
    ///
    /// `frames` is indexed like `snap.cells`; missing entries mean "at rest".
    /// Returns the board geometry for mapping mouse clicks.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        frames: &[Option<AnimationFrame>],
        cursor: Option<(usize, usize)>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) -> BoardGeometry {
        fb.resize(viewport.width, viewport.height);
        fb.clear(TEXT.glyph(' '));

        let geo = self.geometry(snap, viewport);
        if geo.width == 0 {
            self.draw_menu(fb, viewport);
            return geo;
        }

        let board_w = span(geo.width, self.cell_w);
        let board_h = span(geo.height, self.cell_h);
        let (frame_w, frame_h) = self.frame_size(snap);
        fb.fill_rect(
            geo.origin_x,
            geo.origin_y,
            board_w,
            board_h,
            ' ',
            CellStyle::plain(BOARD_BG, BOARD_BG),
        );
        draw_border(fb, geo.origin_x - 1, geo.origin_y - 1, frame_w, frame_h);

        let clip = (snap.phase != Phase::AnimationGameOver).then_some(Rect {
            x: geo.origin_x as i32,
            y: geo.origin_y as i32,
            w: board_w as i32,
            h: board_h as i32,
        });

        // Tiles have flown off once the game is over.
        if snap.phase != Phase::GameOver {
            for (idx, cell) in snap.cells.iter().enumerate() {
                let frame = frames.get(idx).copied().flatten();
                let marked = cursor == Some((cell.x, cell.y)) && snap.phase == Phase::Ran;
                self.draw_tile(fb, &geo, clip, cell, frame, marked);
            }
        }

        self.draw_side_panel(fb, snap, geo, frame_w);

        if snap.phase == Phase::GameOver {
            draw_overlay(fb, geo, board_w, board_h, &["GAME OVER", "r: again", "1-4: size"]);
        }
        geo
    }

    fn frame_size(&self, snap: &GameSnapshot) -> (u16, u16) {
        (
            span(snap.width, self.cell_w).saturating_add(2),
            span(snap.height, self.cell_h).saturating_add(2),
        )
    }

    /// Pixel offset to terminal offset along one axis.
    fn scale(&self, px: f32, cells: u16) -> i32 {
        (px / self.cell_side as f32 * cells as f32).round() as i32
    }

    fn draw_tile(
        &self,
        fb: &mut FrameBuffer,
        geo: &BoardGeometry,
        clip: Option<Rect>,
        cell: &CellView,
        frame: Option<AnimationFrame>,
        marked: bool,
    ) {
        let side = self.cell_side as f32;
        let left = frame.and_then(|f| f.left).unwrap_or(cell.x as f32 * side);
        let top = frame.and_then(|f| f.top).unwrap_or(cell.y as f32 * side);
        let opacity = frame.and_then(|f| f.opacity).unwrap_or(1.0);
        if opacity <= 0.0 {
            return;
        }

        let fg = palette(cell.color).mix(BOARD_BG, 1.0 - opacity);
        let style = CellStyle {
            fg,
            bg: BOARD_BG,
            bold: false,
            dim: opacity < 0.5,
        };
        let ch = if cell.clicked { '▓' } else { '█' };
        let bracket = CellStyle {
            fg: Rgb::new(255, 255, 255),
            bg: fg,
            bold: true,
            dim: false,
        };

        let x0 = geo.origin_x as i32 + self.scale(left, self.cell_w);
        let y0 = geo.origin_y as i32 + self.scale(top, self.cell_h);
        let w = self.cell_w as i32;
        let h = self.cell_h as i32;
        for dy in 0..h {
            for dx in 0..w {
                let (sx, sy) = (x0 + dx, y0 + dy);
                if clip.is_some_and(|r| !r.contains(sx, sy)) {
                    continue;
                }
                let glyph = match (marked && w >= 2, dx) {
                    (true, 0) => bracket.glyph('['),
                    (true, d) if d == w - 1 => bracket.glyph(']'),
                    _ => style.glyph(ch),
                };
                fb.set_signed(sx, sy, glyph);
            }
        }
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, geo: BoardGeometry, frame_w: u16) {
        let panel_x = (geo.origin_x - 1)
            .saturating_add(frame_w.max(12))
            .saturating_add(2);
        if panel_x.saturating_add(12) > fb.width() {
            return;
        }
        let label = CellStyle { bold: true, ..TEXT };
        let mut y = geo.origin_y - 1;
        let mut line = |fb: &mut FrameBuffer, text: &str, style: CellStyle| {
            fb.put_str(panel_x, y, text, style);
            y = y.saturating_add(1);
        };

        line(fb, "POINTS", label);
        line(fb, &snap.points.to_string(), TEXT);
        line(fb, "", TEXT);
        line(fb, "PHASE", label);
        line(fb, snap.phase.as_str(), TEXT);
        line(fb, "", TEXT);
        line(fb, "BOARD", label);
        line(fb, &format!("{}x{}", snap.width, snap.height), TEXT);
        line(fb, "", TEXT);
        line(fb, "click/space: tile", TEXT);
        line(fb, "1-4: new game", TEXT);
        line(fb, "r: restart  q: quit", TEXT);
    }

    fn draw_menu(&self, fb: &mut FrameBuffer, viewport: Viewport) {
        let mut lines = vec!["MATCH 3".to_string(), String::new()];
        for (i, variant) in BOARD_VARIANTS.iter().enumerate() {
            lines.push(format!("{}: {}x{}", i + 1, variant.width, variant.height));
        }
        lines.push(String::new());
        lines.push("r: restart".to_string());
        lines.push("q: quit".to_string());

        let top = viewport.height.saturating_sub(lines.len() as u16) / 2;
        for (i, text) in lines.iter().enumerate() {
            let x = viewport.width.saturating_sub(text.chars().count() as u16) / 2;
            let style = if i == 0 { CellStyle { bold: true, ..TEXT } } else { TEXT };
            fb.put_str(x, top + i as u16, text, style);
        }
    }
}

/// Terminal extent of `count` tiles of `cell` columns or rows, saturating.
fn span(count: usize, cell: u16) -> u16 {
    u16::try_from(count)
        .unwrap_or(u16::MAX)
        .saturating_mul(cell)
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
    if w < 2 || h < 2 {
        return;
    }
    let right = x.saturating_add(w - 1);
    let bottom = y.saturating_add(h - 1);
    fb.set(x, y, BORDER.glyph('┌'));
    fb.set(right, y, BORDER.glyph('┐'));
    fb.set(x, bottom, BORDER.glyph('└'));
    fb.set(right, bottom, BORDER.glyph('┘'));
    for cx in x + 1..right {
        fb.set(cx, y, BORDER.glyph('─'));
        fb.set(cx, bottom, BORDER.glyph('─'));
    }
    for cy in y + 1..bottom {
        fb.set(x, cy, BORDER.glyph('│'));
        fb.set(right, cy, BORDER.glyph('│'));
    }
}

fn draw_overlay(fb: &mut FrameBuffer, geo: BoardGeometry, board_w: u16, board_h: u16, lines: &[&str]) {
    let style = CellStyle {
        fg: Rgb::new(255, 255, 255),
        bg: BOARD_BG,
        bold: true,
        dim: false,
    };
    let top = geo
        .origin_y
        .saturating_add(board_h.saturating_sub(lines.len() as u16) / 2);
    for (i, text) in lines.iter().enumerate() {
        // Centered on the board; may spill over the border on tiny boards.
        let len = text.chars().count() as u16;
        let x = geo.origin_x.saturating_add(board_w / 2).saturating_sub(len / 2);
        fb.put_str(x, top.saturating_add(i as u16), text, style);
    }
}
