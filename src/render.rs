//! Rendering over a minimal 2D surface
//!
//! The simulation is drawn as flat rectangles. Anything that can clear a
//! region and fill a rectangle can host the game: a browser canvas, a test
//! recorder, a headless counter.

use crate::sim::{Rect, SimState};

/// Fill colors, one per entity category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    White,
    Yellow,
    Red,
}

impl Color {
    /// CSS color string
    pub fn as_css(&self) -> &'static str {
        match self {
            Color::White => "white",
            Color::Yellow => "yellow",
            Color::Red => "red",
        }
    }
}

/// Rendering surface collaborator
pub trait Surface {
    fn clear_rect(&mut self, x: f32, y: f32, w: f32, h: f32);
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color);
}

fn fill(surface: &mut impl Surface, rect: &Rect, color: Color) {
    surface.fill_rect(rect.pos.x, rect.pos.y, rect.size.x, rect.size.y, color);
}

/// Clear the whole surface
pub fn clear(state: &SimState, surface: &mut impl Surface) {
    let size = state.surface();
    surface.clear_rect(0.0, 0.0, size.x, size.y);
}

/// Draw back to front: avatar, then projectiles, then hostiles. Read-only.
pub fn render(state: &SimState, surface: &mut impl Surface) {
    fill(surface, &state.avatar.rect, Color::White);
    for projectile in &state.projectiles {
        fill(surface, &projectile.rect, Color::Yellow);
    }
    for hostile in &state.hostiles {
        fill(surface, &hostile.rect, Color::Red);
    }
}

/// Surface that records every call, for tests and headless runs
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub calls: Vec<DrawCall>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCall {
    Clear { x: f32, y: f32, w: f32, h: f32 },
    Fill { x: f32, y: f32, w: f32, h: f32, color: Color },
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of fills with the given color
    pub fn count(&self, color: Color) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, DrawCall::Fill { color: fill, .. } if *fill == color))
            .count()
    }
}

impl Surface for RecordingSurface {
    fn clear_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.calls.push(DrawCall::Clear { x, y, w, h });
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        self.calls.push(DrawCall::Fill { x, y, w, h, color });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::Tuning;

    #[test]
    fn test_render_order() {
        let mut state = SimState::new(Tuning::default(), 9);
        state.spawn_hostile();
        state.fire();
        state.fire();
        state.spawn_hostile();

        let mut surface = RecordingSurface::new();
        render(&state, &mut surface);

        let colors: Vec<Color> = surface
            .calls
            .iter()
            .map(|c| match c {
                DrawCall::Fill { color, .. } => *color,
                DrawCall::Clear { .. } => panic!("render must not clear"),
            })
            .collect();
        assert_eq!(
            colors,
            vec![Color::White, Color::Yellow, Color::Yellow, Color::Red, Color::Red]
        );
    }

    #[test]
    fn test_render_uses_entity_geometry() {
        let mut state = SimState::new(Tuning::default(), 9);
        state.fire();
        let mut surface = RecordingSurface::new();
        render(&state, &mut surface);
        assert_eq!(
            surface.calls,
            vec![
                DrawCall::Fill { x: 385.0, y: 550.0, w: 30.0, h: 30.0, color: Color::White },
                DrawCall::Fill { x: 400.0, y: 550.0, w: 5.0, h: 10.0, color: Color::Yellow },
            ]
        );
    }

    #[test]
    fn test_clear_covers_surface() {
        let state = SimState::new(Tuning::default(), 9);
        let mut surface = RecordingSurface::new();
        clear(&state, &mut surface);
        assert_eq!(
            surface.calls,
            vec![DrawCall::Clear { x: 0.0, y: 0.0, w: 800.0, h: 600.0 }]
        );
    }

    #[test]
    fn test_css_colors() {
        assert_eq!(Color::White.as_css(), "white");
        assert_eq!(Color::Yellow.as_css(), "yellow");
        assert_eq!(Color::Red.as_css(), "red");
    }
}
