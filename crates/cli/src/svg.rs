//! SVG export of a `DrawList`.

use std::fmt::Write as _;

use tangram::api::{Canvas, Color, DrawList, Point};

/// Canvas that appends SVG elements to a string buffer.
pub struct SvgCanvas {
    body: String,
}

impl SvgCanvas {
    fn new() -> Self {
        Self {
            body: String::new(),
        }
    }
}

impl Canvas for SvgCanvas {
    fn fill_polygon(&mut self, color: Color, points: &[Point]) {
        let mut pts = String::new();
        for (i, p) in points.iter().enumerate() {
            if i > 0 {
                pts.push(' ');
            }
            let _ = write!(pts, "{:.2},{:.2}", p.x(), p.y());
        }
        let _ = writeln!(
            self.body,
            r#"  <polygon points="{}" fill="{}" />"#,
            pts,
            color.hex()
        );
    }

    fn fill_circle(&mut self, color: Color, center: Point, radius: f64) {
        let _ = writeln!(
            self.body,
            r#"  <circle cx="{:.2}" cy="{:.2}" r="{:.2}" fill="{}" />"#,
            center.x(),
            center.y(),
            radius,
            color.hex()
        );
    }
}

/// Full SVG document: background rectangle, then the fills in paint order.
pub fn to_svg(list: &DrawList) -> String {
    let mut canvas = SvgCanvas::new();
    list.replay(&mut canvas);
    let mut svg = String::new();
    let _ = writeln!(
        svg,
        r#"<svg width="{w:.0}" height="{h:.0}" viewBox="0 0 {w:.0} {h:.0}" xmlns="http://www.w3.org/2000/svg">"#,
        w = list.width,
        h = list.height
    );
    let _ = writeln!(
        svg,
        r#"  <rect x="0" y="0" width="{:.0}" height="{:.0}" fill="{}" />"#,
        list.width,
        list.height,
        list.background.hex()
    );
    svg.push_str(&canvas.body);
    svg.push_str("</svg>\n");
    svg
}

#[cfg(test)]
mod tests {
    use super::*;
    use tangram::api::Scene;

    #[test]
    fn svg_has_background_and_one_element_per_fill() {
        let list = DrawList::capture(&Scene::default());
        let svg = to_svg(&list);
        assert!(svg.starts_with("<svg width=\"900\" height=\"600\""));
        assert!(svg.contains(r##"fill="#c0c0c0""##));
        assert_eq!(svg.matches("<polygon").count(), 8);
        assert_eq!(svg.matches("<circle").count(), 7);
        assert!(svg.trim_end().ends_with("</svg>"));
        // outline precedes every piece
        let outline = svg.find(r##"fill="#ffffff""##).unwrap();
        let red = svg.find(r##"fill="#ff0000""##).unwrap();
        assert!(outline < red);
    }
}
