//! Scene geometry, styles and per-frame tree building.

use dragdom::{Element, LayoutResult, Rect, Rgb, Style, Stylesheet};
use handlekit::{classes, Handle, Module};

pub const SEEK_TRACK: &str = "seek-track";
pub const VOLUME_TRACK: &str = "volume-track";
const STATUS: &str = "status";

const ACCENT: Rgb = Rgb::new(236, 65, 122);
const RAIL: Rgb = Rgb::new(60, 60, 70);
const SHADOW: Rgb = Rgb::new(30, 30, 36);
const MUTED: Rgb = Rgb::new(150, 150, 160);

/// Where things sit on screen for a given terminal size.
#[derive(Debug, Clone, Copy)]
pub struct Scene {
    pub seek_track: Rect,
    pub volume_track: Rect,
    pub status: Rect,
}

impl Scene {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            seek_track: Rect::new(4, 2, width.saturating_sub(8), 1),
            volume_track: Rect::new(4, 6, 1, height.saturating_sub(10)),
            status: Rect::new(4, height.saturating_sub(2), width.saturating_sub(8), 1),
        }
    }

    /// Document used to measure the handles' containers.
    ///
    /// A knob is one cell wide, so it travels one cell less than its track.
    pub fn document(&self) -> Element {
        Element::div()
            .id("document")
            .child(Element::div().id(SEEK_TRACK).client_size(
                self.seek_track.width.saturating_sub(1) as f64,
                self.seek_track.height as f64,
            ))
            .child(Element::div().id(VOLUME_TRACK).client_size(
                self.volume_track.width as f64,
                self.volume_track.height.saturating_sub(1) as f64,
            ))
    }

    /// Resting rectangle of a horizontal knob (left end of the track).
    fn seek_knob(&self) -> Rect {
        Rect::new(self.seek_track.x, self.seek_track.y, 1, 1)
    }

    /// Resting rectangle of a vertical knob (bottom of the track).
    fn volume_knob(&self) -> Rect {
        Rect::new(
            self.volume_track.x,
            self.volume_track.bottom().saturating_sub(1),
            1,
            1,
        )
    }

    /// Build the frame's element tree and layout.
    pub fn frame(&self, seek: &Handle, volume: &Handle, status: &str) -> (Element, LayoutResult) {
        let mut layout = LayoutResult::new();
        layout.insert(SEEK_TRACK.to_string(), self.seek_track);
        layout.insert(VOLUME_TRACK.to_string(), self.volume_track);
        layout.insert(STATUS.to_string(), self.status);
        place_knob(&mut layout, seek, self.seek_knob(), (0, 1));
        place_knob(&mut layout, volume, self.volume_knob(), (1, 0));

        let root = Element::div()
            .id("document")
            .child(
                Element::div()
                    .id(SEEK_TRACK)
                    .class("track")
                    .child(seek.el().clone()),
            )
            .child(
                Element::div()
                    .id(VOLUME_TRACK)
                    .class("track")
                    .child(volume.el().clone()),
            )
            .child(Element::text(status).id(STATUS).class("status"));

        (root, layout)
    }
}

/// Lay out a handle's root and its inner elements. The shadow sits one cell
/// off the knob, away from the track.
fn place_knob(layout: &mut LayoutResult, handle: &Handle, knob: Rect, shadow_offset: (i32, i32)) {
    let el = handle.el();
    layout.insert(el.id.clone(), knob);
    for child in el.child_elements() {
        let rect = if child.class_list.contains(classes::SHADOW) {
            knob.translate(shadow_offset.0, shadow_offset.1)
        } else {
            knob
        };
        layout.insert(child.id.clone(), rect);
    }
}

pub fn stylesheet() -> Stylesheet {
    Stylesheet::new()
        .rule("track", Style::new().background(RAIL))
        .rule(classes::HANDLE, Style::new().background(RAIL))
        .rule(classes::SHADOW, Style::new().fill('░').foreground(SHADOW))
        .rule(classes::INNER, Style::new().fill('●').foreground(ACCENT))
        .rule(classes::IS_BOUND, Style::new().background(Rgb::new(90, 40, 60)))
        .rule("status", Style::new().foreground(MUTED))
}
