//! SVG document envelope and polygon records.
//!
//! Output is written front to back with no seeking, so any `io::Write` sink
//! works, including a socket or response body buffer.

use std::io::{self, Write};

use crate::canvas::Canvas;
use crate::surface::CellPolygon;

/// MIME type of the rendered document.
pub const SVG_CONTENT_TYPE: &str = "image/svg+xml";

/// Write the opening `<svg>` tag declaring the canvas size.
pub fn write_header<W: Write>(out: &mut W, canvas: &Canvas) -> io::Result<()> {
    write!(
        out,
        "<svg xmlns='http://www.w3.org/2000/svg' \
         style='stroke: grey; fill: white; stroke-width: 0.7' \
         width='{}' height='{}'>",
        canvas.width(),
        canvas.height()
    )
}

/// Write one `<polygon>` element, vertices in their stored order.
pub fn write_polygon<W: Write>(out: &mut W, polygon: &CellPolygon) -> io::Result<()> {
    let [a, b, c, d] = &polygon.vertices;
    writeln!(
        out,
        "<polygon fill='{}' points='{},{} {},{} {},{} {},{}' />",
        polygon.fill, a.sx, a.sy, b.sx, b.sy, c.sx, c.sy, d.sx, d.sy
    )
}

/// Close the document.
pub fn write_footer<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "</svg>")
}
