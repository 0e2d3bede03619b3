//! Surface builder: walks the sampling grid and emits cell polygons.

use std::io::Write;
use std::time::Instant;

use tracing::trace;

use crate::canvas::{Canvas, CELLS};
use crate::error::RenderResult;
use crate::projection::{GridPoint, Projector};
use crate::shading::{has_non_finite, Fill};
use crate::svg;

/// Rough size of one polygon record, used to presize output buffers.
const BYTES_PER_POLYGON: usize = 128;

/// The quadrilateral covering one grid cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellPolygon {
    pub i: u32,
    pub j: u32,
    /// Corners (i+1, j), (i, j), (i, j+1), (i+1, j+1), in that order.
    pub vertices: [GridPoint; 4],
    pub fill: Fill,
}

/// Counts from one full grid traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderSummary {
    /// Polygons written to the document
    pub polygons: usize,
    /// Cells dropped for having a non-finite corner
    pub skipped: usize,
}

/// A fully buffered document plus its traversal counts.
#[derive(Debug, Clone)]
pub struct RenderedSurface {
    pub body: Vec<u8>,
    pub summary: RenderSummary,
}

/// Builds the surface for one canvas.
///
/// Stateless apart from the canvas it was created with; every call walks
/// the grid again and produces identical output.
#[derive(Debug, Clone, Copy)]
pub struct SurfaceBuilder {
    projector: Projector,
}

impl SurfaceBuilder {
    pub fn new(canvas: Canvas) -> Self {
        Self {
            projector: Projector::new(canvas),
        }
    }

    pub fn canvas(&self) -> Canvas {
        self.projector.canvas()
    }

    /// Polygon for cell `(i, j)`, or `None` if any corner height is not
    /// finite.
    pub fn cell(&self, i: u32, j: u32) -> Option<CellPolygon> {
        let vertices = [
            self.projector.corner(i + 1, j),
            self.projector.corner(i, j),
            self.projector.corner(i, j + 1),
            self.projector.corner(i + 1, j + 1),
        ];
        let heights = vertices.map(|p| p.z);

        if has_non_finite(&heights) {
            return None;
        }

        Some(CellPolygon {
            i,
            j,
            vertices,
            fill: Fill::for_heights(&heights, self.canvas().z_scale()),
        })
    }

    /// Lazily yields every emitted polygon in row-major order
    /// (outer loop over `i`, inner over `j`).
    pub fn polygons(&self) -> impl Iterator<Item = CellPolygon> + '_ {
        (0..CELLS).flat_map(move |i| (0..CELLS).filter_map(move |j| self.cell(i, j)))
    }

    /// Stream the full SVG document into `out`.
    ///
    /// Each record is written as soon as its cell is computed; wrap
    /// unbuffered sinks in a `BufWriter`.
    pub fn write_svg<W: Write>(&self, out: &mut W) -> RenderResult<RenderSummary> {
        let start = Instant::now();
        let mut summary = RenderSummary::default();

        svg::write_header(out, &self.canvas())?;

        for i in 0..CELLS {
            for j in 0..CELLS {
                match self.cell(i, j) {
                    Some(polygon) => {
                        svg::write_polygon(out, &polygon)?;
                        summary.polygons += 1;
                    }
                    None => summary.skipped += 1,
                }
            }
        }

        svg::write_footer(out)?;

        trace!(
            width = self.canvas().width(),
            height = self.canvas().height(),
            polygons = summary.polygons,
            skipped = summary.skipped,
            elapsed_us = start.elapsed().as_micros() as u64,
            "Surface written"
        );

        Ok(summary)
    }

    /// Render the document into memory.
    pub fn render_svg(&self) -> RenderResult<RenderedSurface> {
        let cells = (CELLS * CELLS) as usize;
        let mut body = Vec::with_capacity(cells * BYTES_PER_POLYGON);
        let summary = self.write_svg(&mut body)?;
        Ok(RenderedSurface { body, summary })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RenderError;
    use std::io;

    /// Accepts `remaining` bytes, then fails every write.
    struct FailingSink {
        remaining: usize,
    }

    impl Write for FailingSink {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.remaining == 0 {
                return Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"));
            }
            let n = buf.len().min(self.remaining);
            self.remaining -= n;
            Ok(n)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_corner_order() {
        let builder = SurfaceBuilder::new(Canvas::default());
        let projector = Projector::new(Canvas::default());

        let polygon = builder.cell(10, 20).unwrap();
        assert_eq!(polygon.vertices[0], projector.corner(11, 20));
        assert_eq!(polygon.vertices[1], projector.corner(10, 20));
        assert_eq!(polygon.vertices[2], projector.corner(10, 21));
        assert_eq!(polygon.vertices[3], projector.corner(11, 21));
    }

    #[test]
    fn test_cells_touching_origin_are_skipped() {
        let builder = SurfaceBuilder::new(Canvas::default());
        for (i, j) in [(49, 49), (49, 50), (50, 49), (50, 50)] {
            assert!(builder.cell(i, j).is_none(), "cell ({}, {})", i, j);
        }
        assert!(builder.cell(48, 49).is_some());
        assert!(builder.cell(51, 50).is_some());
    }

    #[test]
    fn test_polygons_row_major() {
        let builder = SurfaceBuilder::new(Canvas::default());
        let cells: Vec<(u32, u32)> = builder.polygons().take(3).map(|p| (p.i, p.j)).collect();
        assert_eq!(cells, vec![(0, 0), (0, 1), (0, 2)]);

        let last = builder.polygons().last().unwrap();
        assert_eq!((last.i, last.j), (CELLS - 1, CELLS - 1));
    }

    #[test]
    fn test_summary_counts() {
        let builder = SurfaceBuilder::new(Canvas::default());
        let rendered = builder.render_svg().unwrap();

        assert_eq!(rendered.summary.skipped, 4);
        assert_eq!(rendered.summary.polygons, 9_996);
        assert_eq!(builder.polygons().count(), rendered.summary.polygons);
    }

    #[test]
    fn test_sink_failure_is_reported() {
        let builder = SurfaceBuilder::new(Canvas::default());

        // Fails part way through the polygon records.
        let mut sink = FailingSink { remaining: 4096 };
        match builder.write_svg(&mut sink) {
            Err(RenderError::Io(e)) => assert_eq!(e.kind(), io::ErrorKind::BrokenPipe),
            other => panic!("expected Io error, got {:?}", other),
        }

        // Fails on the header itself.
        let mut sink = FailingSink { remaining: 0 };
        assert!(matches!(builder.write_svg(&mut sink), Err(RenderError::Io(_))));
    }
}
