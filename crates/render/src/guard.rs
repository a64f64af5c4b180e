//! Scoped guards pairing every backend state change with its undo.
//!
//! A decorator box applies a transform, paints its child, and must restore
//! the backend no matter how the paint path exits. Each guard applies its
//! change on construction and undoes it on drop, so an early return from a
//! recursive draw can never leave the shared backend corrupted.

use crate::traits::{Graphics, Stroke};
use mathbox_types::Color;
use std::ops::{Deref, DerefMut};

pub struct TranslateGuard<'a> {
    g: &'a mut dyn Graphics,
    dx: f32,
    dy: f32,
}

impl<'a> TranslateGuard<'a> {
    pub fn new(g: &'a mut dyn Graphics, dx: f32, dy: f32) -> Self {
        g.translate(dx, dy);
        Self { g, dx, dy }
    }
}

impl Drop for TranslateGuard<'_> {
    fn drop(&mut self) {
        self.g.translate(-self.dx, -self.dy);
    }
}

impl<'a> Deref for TranslateGuard<'a> {
    type Target = dyn Graphics + 'a;

    fn deref(&self) -> &Self::Target {
        self.g
    }
}

impl DerefMut for TranslateGuard<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.g
    }
}

/// Undoes by the reciprocal factors; callers must not pass zero.
pub struct ScaleGuard<'a> {
    g: &'a mut dyn Graphics,
    sx: f32,
    sy: f32,
}

impl<'a> ScaleGuard<'a> {
    pub fn new(g: &'a mut dyn Graphics, sx: f32, sy: f32) -> Self {
        g.scale(sx, sy);
        Self { g, sx, sy }
    }
}

impl Drop for ScaleGuard<'_> {
    fn drop(&mut self) {
        self.g.scale(1.0 / self.sx, 1.0 / self.sy);
    }
}

impl<'a> Deref for ScaleGuard<'a> {
    type Target = dyn Graphics + 'a;

    fn deref(&self) -> &Self::Target {
        self.g
    }
}

impl DerefMut for ScaleGuard<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.g
    }
}

pub struct RotateGuard<'a> {
    g: &'a mut dyn Graphics,
    angle: f32,
    px: f32,
    py: f32,
}

impl<'a> RotateGuard<'a> {
    pub fn new(g: &'a mut dyn Graphics, angle: f32, px: f32, py: f32) -> Self {
        g.rotate(angle, px, py);
        Self { g, angle, px, py }
    }
}

impl Drop for RotateGuard<'_> {
    fn drop(&mut self) {
        self.g.rotate(-self.angle, self.px, self.py);
    }
}

impl<'a> Deref for RotateGuard<'a> {
    type Target = dyn Graphics + 'a;

    fn deref(&self) -> &Self::Target {
        self.g
    }
}

impl DerefMut for RotateGuard<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.g
    }
}

/// Saves the current color on entry and restores it on drop.
pub struct ColorGuard<'a> {
    g: &'a mut dyn Graphics,
    saved: Color,
}

impl<'a> ColorGuard<'a> {
    pub fn new(g: &'a mut dyn Graphics) -> Self {
        let saved = g.color();
        Self { g, saved }
    }

    pub fn saved(&self) -> Color {
        self.saved
    }
}

impl Drop for ColorGuard<'_> {
    fn drop(&mut self) {
        self.g.set_color(self.saved);
    }
}

impl<'a> Deref for ColorGuard<'a> {
    type Target = dyn Graphics + 'a;

    fn deref(&self) -> &Self::Target {
        self.g
    }
}

impl DerefMut for ColorGuard<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.g
    }
}

/// Saves the current stroke on entry and restores it on drop.
pub struct StrokeGuard<'a> {
    g: &'a mut dyn Graphics,
    saved: Stroke,
}

impl<'a> StrokeGuard<'a> {
    pub fn new(g: &'a mut dyn Graphics) -> Self {
        let saved = g.stroke();
        Self { g, saved }
    }

    pub fn saved(&self) -> Stroke {
        self.saved
    }
}

impl Drop for StrokeGuard<'_> {
    fn drop(&mut self) {
        self.g.set_stroke(self.saved);
    }
}

impl<'a> Deref for StrokeGuard<'a> {
    type Target = dyn Graphics + 'a;

    fn deref(&self) -> &Self::Target {
        self.g
    }
}

impl DerefMut for StrokeGuard<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.g
    }
}
