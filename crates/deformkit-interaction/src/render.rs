//! Handle render contract.
//!
//! Controllers never touch pixels. They describe their glyphs to a
//! [`HandleRenderer`] supplied by the host; [`PathRenderer`] is a ready-made
//! implementation that collects everything into `lyon` paths.

use deformkit_core::{DevicePoint, FramePoint};
use lyon::math::{point, Box2D};
use lyon::path::{Path, Winding};

/// Glyph drawn at a handle anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandleShape {
    Square,
    Circle,
    Diamond,
}

/// Drawing surface for controllers.
pub trait HandleRenderer {
    /// Closed contour outline.
    fn outline(&mut self, points: &[DevicePoint]);

    /// Handle glyph centered on `at`.
    fn handle(&mut self, at: &DevicePoint, shape: HandleShape, radius: f64, hovered: bool);

    /// Connector line, e.g. the stem of a rotation handle.
    fn guide(&mut self, _from: &DevicePoint, _to: &DevicePoint) {}
}

/// A rendered handle glyph.
#[derive(Debug, Clone)]
pub struct RenderedHandle {
    pub path: Path,
    pub shape: HandleShape,
    pub hovered: bool,
}

/// Collects outlines, handles and guides as `lyon` paths.
#[derive(Debug, Default, Clone)]
pub struct PathRenderer {
    pub outlines: Vec<Path>,
    pub handles: Vec<RenderedHandle>,
    pub guides: Vec<Path>,
}

impl PathRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.outlines.clear();
        self.handles.clear();
        self.guides.clear();
    }

    pub fn hovered_handles(&self) -> impl Iterator<Item = &RenderedHandle> {
        self.handles.iter().filter(|h| h.hovered)
    }
}

fn to_lyon(p: &DevicePoint) -> lyon::math::Point {
    let (x, y) = p.absolute();
    point(x as f32, y as f32)
}

impl HandleRenderer for PathRenderer {
    fn outline(&mut self, points: &[DevicePoint]) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        let mut builder = Path::builder();
        builder.begin(to_lyon(first));
        for p in rest {
            builder.line_to(to_lyon(p));
        }
        builder.end(true);
        self.outlines.push(builder.build());
    }

    fn handle(&mut self, at: &DevicePoint, shape: HandleShape, radius: f64, hovered: bool) {
        let center = to_lyon(at);
        let r = radius as f32;
        let mut builder = Path::builder();
        match shape {
            HandleShape::Circle => builder.add_circle(center, r, Winding::Positive),
            HandleShape::Square => builder.add_rectangle(
                &Box2D::new(point(center.x - r, center.y - r), point(center.x + r, center.y + r)),
                Winding::Positive,
            ),
            HandleShape::Diamond => {
                builder.begin(point(center.x, center.y - r));
                builder.line_to(point(center.x + r, center.y));
                builder.line_to(point(center.x, center.y + r));
                builder.line_to(point(center.x - r, center.y));
                builder.end(true);
            }
        }
        self.handles.push(RenderedHandle {
            path: builder.build(),
            shape,
            hovered,
        });
    }

    fn guide(&mut self, from: &DevicePoint, to: &DevicePoint) {
        let mut builder = Path::builder();
        builder.begin(to_lyon(from));
        builder.line_to(to_lyon(to));
        builder.end(false);
        self.guides.push(builder.build());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lyon::path::PathEvent;

    #[test]
    fn test_outline_is_closed() {
        let mut renderer = PathRenderer::new();
        renderer.outline(&[
            DevicePoint::new(0.0, 0.0),
            DevicePoint::new(10.0, 0.0),
            DevicePoint::new(10.0, 10.0),
        ]);
        let path = &renderer.outlines[0];
        let closed = path
            .iter()
            .any(|e| matches!(e, PathEvent::End { close: true, .. }));
        assert!(closed);
    }

    #[test]
    fn test_empty_outline_is_skipped() {
        let mut renderer = PathRenderer::new();
        renderer.outline(&[]);
        assert!(renderer.outlines.is_empty());
    }

    #[test]
    fn test_handles_and_guides() {
        let mut renderer = PathRenderer::new();
        let at = DevicePoint::new(5.0, 5.0);
        renderer.handle(&at, HandleShape::Square, 3.0, false);
        renderer.handle(&at, HandleShape::Circle, 3.0, true);
        renderer.handle(&at, HandleShape::Diamond, 3.0, false);
        renderer.guide(&at, &DevicePoint::new(5.0, -20.0));

        assert_eq!(renderer.handles.len(), 3);
        assert_eq!(renderer.hovered_handles().count(), 1);
        assert_eq!(renderer.guides.len(), 1);

        renderer.clear();
        assert!(renderer.handles.is_empty());
    }
}
