use std::fmt::Display;

use image::Rgba;
use itertools::Itertools;

use super::{Rect, VectorImage};

/// CSS `rgba()` alpha in `0..=1`; `round(alpha * 255)` gives back the byte
fn css_alpha(a: u8) -> f64 {
    f64::from(a) / 255.0
}

fn css_rgba(color: Rgba<u8>) -> String {
    let Rgba([r, g, b, a]) = color;
    format!("rgba({r},{g},{b},{})", css_alpha(a))
}

fn write_rect(svg: &mut String, rect: &Rect) {
    svg.push_str(&format!(
        "  <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" style=\"fill:{}\" />\n",
        rect.x,
        rect.y,
        rect.width,
        rect.height,
        css_rgba(rect.color)
    ));
}

impl VectorImage {
    /// Serializes the image as an SVG document
    ///
    /// Each rectangle becomes one `<rect>` element, with a blank line after every one of the
    /// [`Self::rows`] rows, including rows without rectangles.
    #[must_use]
    pub fn to_svg(&self) -> String {
        let mut svg = format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\">\n\n",
            self.width, self.height
        );
        let groups = self.rects.iter().group_by(|rect| rect.y);
        let rows = groups
            .into_iter()
            .map(|(_, row)| Some(row))
            .pad_using(self.rows as usize, |_| None);
        for row in rows {
            for rect in row.into_iter().flatten() {
                write_rect(&mut svg, rect);
            }
            svg.push('\n');
        }
        svg.push_str("</svg>\n");
        svg
    }
}

impl Display for VectorImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_svg())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alpha_round_trips_for_every_byte() {
        for a in 0..=255u8 {
            let written = css_alpha(a).to_string();
            let read: f64 = written.parse().unwrap();
            assert_eq!((read * 255.0).round() as u8, a);
        }
        assert_eq!(css_alpha(255).to_string(), "1");
        assert_eq!(css_alpha(0).to_string(), "0");
    }

    #[test]
    fn rows_are_separated_by_blank_lines() {
        let rect = |x, y| Rect {
            x,
            y,
            width: 1,
            height: 1,
            color: Rgba([255, 0, 0, 255]),
        };
        let image = VectorImage {
            width: 2,
            height: 2,
            rows: 2,
            rects: vec![rect(0, 0), rect(1, 0), rect(0, 1)],
        };
        let expected = "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"2\" height=\"2\">

  <rect x=\"0\" y=\"0\" width=\"1\" height=\"1\" style=\"fill:rgba(255,0,0,1)\" />
  <rect x=\"1\" y=\"0\" width=\"1\" height=\"1\" style=\"fill:rgba(255,0,0,1)\" />

  <rect x=\"0\" y=\"1\" width=\"1\" height=\"1\" style=\"fill:rgba(255,0,0,1)\" />

</svg>
";
        assert_eq!(image.to_svg(), expected);
        assert_eq!(image.to_string(), expected);
    }

    #[test]
    fn empty_rows_keep_their_blank_line() {
        let image = VectorImage {
            width: 0,
            height: 2,
            rows: 2,
            rects: Vec::new(),
        };
        assert_eq!(
            image.to_svg(),
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"0\" height=\"2\">\n\n\n\n</svg>\n"
        );
    }
}
