use bevy::prelude::*;

use super::render::DrawSink;

/// Ring spacing used to fake filled discs with outline-only gizmos.
const FILL_STEP: f32 = 2.0;

/// [`DrawSink`] over Bevy's immediate-mode gizmos.
///
/// Converts simulation space (origin top-left, +Y down) into Bevy 2D world
/// space (origin at the window centre, +Y up). Gizmo line width is set per
/// config group, so `width` and `stroke` only pick between fill and outline.
pub struct GizmoSink<'a, 'w, 's> {
    gizmos: &'a mut Gizmos<'w, 's>,
    half: Vec2,
}

impl<'a, 'w, 's> GizmoSink<'a, 'w, 's> {
    pub fn new(gizmos: &'a mut Gizmos<'w, 's>, half_extents: Vec2) -> Self {
        Self {
            gizmos,
            half: half_extents,
        }
    }

    fn to_world(&self, p: Vec2) -> Vec2 {
        Vec2::new(p.x - self.half.x, self.half.y - p.y)
    }
}

impl DrawSink for GizmoSink<'_, '_, '_> {
    fn circle(&mut self, center: Vec2, radius: f32, color: Color, stroke: f32) {
        let center = self.to_world(center);
        if stroke > 0.0 {
            self.gizmos.circle_2d(center, radius, color);
            return;
        }
        let mut r = radius;
        while r > 0.0 {
            self.gizmos.circle_2d(center, r, color);
            r -= FILL_STEP;
        }
    }

    fn line(&mut self, a: Vec2, b: Vec2, color: Color, _width: f32) {
        let (a, b) = (self.to_world(a), self.to_world(b));
        self.gizmos.line_2d(a, b, color);
    }
}
