//! Inline SVG diagrams for placeholder posts. Each diagram is a small fixed
//! scene described by [`ShapeDescriptor`]; [`select`] maps a section's
//! diagram tag to its descriptor and [`svg`] serializes a descriptor to
//! markup. Every shape carries two paints, one for the light theme and one
//! for the dark theme, emitted as sibling groups that the stylesheet toggles.

use std::fmt::Write;

/// Fill and stroke for one theme. Shapes that only stroke (the dark frames)
/// leave `fill` unset and inherit `fill="none"` from the `<svg>` root.
#[derive(Debug, Clone, Copy)]
pub struct Paint {
    pub fill: Option<&'static str>,
    pub stroke: Option<&'static str>,
}

#[derive(Debug, Clone, Copy)]
pub enum Shape {
    Rect {
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        radius: i32,
        light: Paint,
        dark: Paint,
    },
    Circle {
        cx: i32,
        cy: i32,
        radius: i32,
        light: Paint,
        dark: Paint,
    },
    Line {
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        width: i32,
        light: Paint,
        dark: Paint,
    },
}

impl Shape {
    fn paint(&self, dark: bool) -> &Paint {
        match self {
            Shape::Rect { light, dark: d, .. }
            | Shape::Circle { light, dark: d, .. }
            | Shape::Line { light, dark: d, .. } => {
                if dark {
                    d
                } else {
                    light
                }
            }
        }
    }

    fn write_svg(&self, out: &mut String, dark: bool) -> std::fmt::Result {
        let paint = self.paint(dark);
        match *self {
            Shape::Rect {
                x,
                y,
                width,
                height,
                radius,
                ..
            } => {
                write!(
                    out,
                    r#"<rect x="{}" y="{}" width="{}" height="{}" rx="{}""#,
                    x, y, width, height, radius
                )?;
            }
            Shape::Circle { cx, cy, radius, .. } => {
                write!(out, r#"<circle cx="{}" cy="{}" r="{}""#, cx, cy, radius)?;
            }
            Shape::Line {
                x1,
                y1,
                x2,
                y2,
                width,
                ..
            } => {
                write!(
                    out,
                    r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke-width="{}""#,
                    x1, y1, x2, y2, width
                )?;
            }
        }
        if let Some(fill) = paint.fill {
            write!(out, r#" fill="{}""#, fill)?;
        }
        if let Some(stroke) = paint.stroke {
            write!(out, r#" stroke="{}""#, stroke)?;
        }
        out.push_str("/>");
        Ok(())
    }
}

/// A complete diagram: a view box and the shapes inside it.
#[derive(Debug)]
pub struct ShapeDescriptor {
    pub view_box: (i32, i32),
    pub shapes: &'static [Shape],
}

/// Maps a diagram tag to its descriptor. Total over all inputs: the three
/// known tags resolve and anything else is `None`, which callers render as
/// nothing rather than an error.
pub fn select(tag: &str) -> Option<&'static ShapeDescriptor> {
    match tag {
        "layout" => Some(&LAYOUT),
        "stream" => Some(&STREAM),
        "hooks" => Some(&HOOKS),
        _ => None,
    }
}

/// Serializes a descriptor to an `<svg>` element with the given class. The
/// light and dark variants are emitted back to back; the stylesheet shows
/// exactly one of them.
pub fn svg(descriptor: &ShapeDescriptor, class: &str) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_svg(descriptor, class, &mut out);
    out
}

fn write_svg(descriptor: &ShapeDescriptor, class: &str, out: &mut String) -> std::fmt::Result {
    write!(
        out,
        r#"<svg class="{}" viewBox="0 0 {} {}" fill="none" xmlns="http://www.w3.org/2000/svg">"#,
        class, descriptor.view_box.0, descriptor.view_box.1
    )?;
    out.push_str(r#"<g class="dark:hidden">"#);
    for shape in descriptor.shapes {
        shape.write_svg(out, false)?;
    }
    out.push_str("</g>");
    out.push_str(r#"<g class="hidden dark:block">"#);
    for shape in descriptor.shapes {
        shape.write_svg(out, true)?;
    }
    out.push_str("</g></svg>");
    Ok(())
}

const FRAME: Shape = Shape::Rect {
    x: 2,
    y: 2,
    width: 236,
    height: 136,
    radius: 8,
    light: Paint {
        fill: Some("#ffffff"),
        stroke: Some("#e6e6e6"),
    },
    dark: Paint {
        fill: None,
        stroke: Some("rgba(255,255,255,0.06)"),
    },
};

/// Nested boxes: a header split in two above one large content area.
pub static LAYOUT: ShapeDescriptor = ShapeDescriptor {
    view_box: (240, 140),
    shapes: &[
        FRAME,
        Shape::Rect {
            x: 12,
            y: 12,
            width: 80,
            height: 40,
            radius: 6,
            light: Paint {
                fill: Some("#eef2ff"),
                stroke: None,
            },
            dark: Paint {
                fill: Some("rgba(255,255,255,0.03)"),
                stroke: None,
            },
        },
        Shape::Rect {
            x: 104,
            y: 12,
            width: 124,
            height: 40,
            radius: 6,
            light: Paint {
                fill: Some("#f1f5f9"),
                stroke: None,
            },
            dark: Paint {
                fill: Some("rgba(255,255,255,0.02)"),
                stroke: None,
            },
        },
        Shape::Rect {
            x: 12,
            y: 64,
            width: 216,
            height: 64,
            radius: 6,
            light: Paint {
                fill: Some("#f1f5f9"),
                stroke: None,
            },
            dark: Paint {
                fill: Some("rgba(255,255,255,0.02)"),
                stroke: None,
            },
        },
    ],
};

/// Chunks arriving over a timeline: three dots above a baseline.
pub static STREAM: ShapeDescriptor = ShapeDescriptor {
    view_box: (240, 140),
    shapes: &[
        FRAME,
        Shape::Circle {
            cx: 48,
            cy: 70,
            radius: 10,
            light: Paint {
                fill: Some("#e6eef8"),
                stroke: None,
            },
            dark: Paint {
                fill: Some("rgba(255,255,255,0.06)"),
                stroke: None,
            },
        },
        Shape::Circle {
            cx: 96,
            cy: 70,
            radius: 10,
            light: Paint {
                fill: Some("#eef2ff"),
                stroke: None,
            },
            dark: Paint {
                fill: Some("rgba(255,255,255,0.04)"),
                stroke: None,
            },
        },
        Shape::Circle {
            cx: 144,
            cy: 70,
            radius: 10,
            light: Paint {
                fill: Some("#f1f5f9"),
                stroke: None,
            },
            dark: Paint {
                fill: Some("rgba(255,255,255,0.03)"),
                stroke: None,
            },
        },
        Shape::Line {
            x1: 20,
            y1: 110,
            x2: 220,
            y2: 110,
            width: 2,
            light: Paint {
                fill: None,
                stroke: Some("#e6e6e6"),
            },
            dark: Paint {
                fill: None,
                stroke: Some("rgba(255,255,255,0.03)"),
            },
        },
    ],
};

/// Three peer components sharing one extracted behavior underneath.
pub static HOOKS: ShapeDescriptor = ShapeDescriptor {
    view_box: (240, 140),
    shapes: &[
        FRAME,
        Shape::Rect {
            x: 18,
            y: 20,
            width: 48,
            height: 34,
            radius: 4,
            light: Paint {
                fill: Some("#eef2ff"),
                stroke: None,
            },
            dark: Paint {
                fill: Some("rgba(255,255,255,0.03)"),
                stroke: None,
            },
        },
        Shape::Rect {
            x: 86,
            y: 20,
            width: 48,
            height: 34,
            radius: 4,
            light: Paint {
                fill: Some("#f1f5f9"),
                stroke: None,
            },
            dark: Paint {
                fill: Some("rgba(255,255,255,0.02)"),
                stroke: None,
            },
        },
        Shape::Rect {
            x: 154,
            y: 20,
            width: 48,
            height: 34,
            radius: 4,
            light: Paint {
                fill: Some("#f8fafc"),
                stroke: None,
            },
            dark: Paint {
                fill: Some("rgba(255,255,255,0.01)"),
                stroke: None,
            },
        },
        Shape::Line {
            x1: 30,
            y1: 70,
            x2: 210,
            y2: 70,
            width: 2,
            light: Paint {
                fill: None,
                stroke: Some("#e6e6e6"),
            },
            dark: Paint {
                fill: None,
                stroke: Some("rgba(255,255,255,0.03)"),
            },
        },
    ],
};

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_select_known_tags() {
        assert!(select("layout").is_some());
        assert!(select("stream").is_some());
        assert!(select("hooks").is_some());
    }

    #[test]
    fn test_select_unknown_tags() {
        assert!(select("").is_none());
        assert!(select("LAYOUT").is_none());
        assert!(select("flowchart").is_none());
    }

    #[test]
    fn test_svg_structure() {
        let markup = svg(&LAYOUT, "hero-diagram");
        assert!(markup.starts_with(r#"<svg class="hero-diagram" viewBox="0 0 240 140""#));
        assert!(markup.ends_with("</g></svg>"));
        assert!(markup.contains(r#"<g class="dark:hidden">"#));
        assert!(markup.contains(r#"<g class="hidden dark:block">"#));
    }

    #[test]
    fn test_svg_layout_shapes() {
        let markup = svg(&LAYOUT, "d");
        // The frame plus three boxes, once per theme group.
        assert_eq!(markup.matches("<rect").count(), 8);
        assert!(markup.contains(r##"<rect x="12" y="64" width="216" height="64" rx="6" fill="#f1f5f9"/>"##));
    }

    #[test]
    fn test_svg_stream_shapes() {
        let markup = svg(&STREAM, "d");
        assert_eq!(markup.matches("<circle").count(), 6);
        assert_eq!(markup.matches("<line").count(), 2);
        assert!(markup.contains(r##"<line x1="20" y1="110" x2="220" y2="110" stroke-width="2" stroke="#e6e6e6"/>"##));
    }

    #[test]
    fn test_svg_dark_frame_has_no_fill() {
        let markup = svg(&HOOKS, "d");
        assert!(markup.contains(r#"<rect x="2" y="2" width="236" height="136" rx="8" stroke="rgba(255,255,255,0.06)"/>"#));
    }
}
