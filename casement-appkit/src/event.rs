//! Routes `NSEvent`s to the chrome engine.
//!
//! AppKit resizes windows from outside their frame and delivers ordinary mouse events to the
//! custom buttons, so only the caption needs help: dragging it moves the window, double
//! clicking it zooms.

use casement_core::backend::{ChromeContext, EventResponse};
use casement_core::dpi::{LogicalPosition, LogicalSize, PhysicalPosition};
use casement_core::hit_test::{HitRegion, HitTestQuery};
use casement_core::title_bar::MaximizeButtonIcon;
use objc2_app_kit::{NSEvent, NSEventType, NSWindow};
use tracing::trace;

use crate::window;

pub(crate) fn handle_event(
    ns_window: &NSWindow,
    event: &NSEvent,
    cx: &mut ChromeContext<'_>,
) -> EventResponse {
    match event.r#type() {
        NSEventType::LeftMouseDown => handle_left_mouse_down(ns_window, event, cx),
        NSEventType::MouseMoved => handle_mouse_moved(ns_window, event, cx),
        NSEventType::MouseExited => {
            cx.tracker.leave(cx.title_bar);
            EventResponse::Unhandled
        },
        _ => EventResponse::Unhandled,
    }
}

/// Convert a location in window coordinates, whose origin is the bottom-left corner, to a
/// physical position from the top-left corner.
fn flip_location(
    location: LogicalPosition<f64>,
    window_height: f64,
    scale_factor: f64,
) -> PhysicalPosition<i32> {
    LogicalPosition::new(location.x, window_height - location.y).to_physical(scale_factor)
}

fn hit_test(ns_window: &NSWindow, event: &NSEvent, cx: &ChromeContext<'_>) -> HitRegion {
    let scale_factor = window::scale_factor(ns_window);
    let frame = ns_window.frame();
    let location = event.locationInWindow();
    let pointer =
        flip_location(LogicalPosition::new(location.x, location.y), frame.size.height, scale_factor);
    let window_size =
        LogicalSize::new(frame.size.width, frame.size.height).to_physical::<u32>(scale_factor);

    let layout = cx.title_bar.layout();
    HitTestQuery {
        pointer,
        window_size,
        metrics: window::border_metrics(ns_window, cx.config),
        config: cx.config,
        maximized: window::is_zoomed(ns_window),
        title_bar: &layout,
    }
    .classify()
}

/// What a left mouse down does to the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CaptionAction {
    Drag,
    Zoom,
    /// Consumed without effect.
    Ignore,
}

/// The action for a left mouse down on `region`, or `None` if the event belongs to the view.
fn caption_action(
    region: &HitRegion,
    click_count: isize,
    resizable: bool,
    full_screen: bool,
) -> Option<CaptionAction> {
    if *region != HitRegion::Caption {
        return None;
    }

    Some(match click_count {
        ..=1 => CaptionAction::Drag,
        _ if resizable && !full_screen => CaptionAction::Zoom,
        _ => CaptionAction::Ignore,
    })
}

fn handle_left_mouse_down(
    ns_window: &NSWindow,
    event: &NSEvent,
    cx: &mut ChromeContext<'_>,
) -> EventResponse {
    let region = hit_test(ns_window, event, cx);
    let click_count = unsafe { event.clickCount() };
    let action = caption_action(
        &region,
        click_count,
        cx.config.resizable,
        window::is_full_screen(ns_window),
    );

    match action {
        Some(CaptionAction::Drag) => {
            trace!("dragging window from caption");
            ns_window.performWindowDragWithEvent(event);
        },
        Some(CaptionAction::Zoom) => {
            trace!("zooming from caption double click");
            ns_window.zoom(None);
            let icon = MaximizeButtonIcon::for_state(window::is_zoomed(ns_window));
            cx.title_bar.set_maximize_icon(icon);
        },
        Some(CaptionAction::Ignore) => (),
        None => return EventResponse::Unhandled,
    }
    EventResponse::Handled(0)
}

fn handle_mouse_moved(
    ns_window: &NSWindow,
    event: &NSEvent,
    cx: &mut ChromeContext<'_>,
) -> EventResponse {
    let region = hit_test(ns_window, event, cx);
    // AppKit tracks the pointer for us, so there is no leave tracking to request.
    cx.tracker.hover(cx.title_bar, &region);
    EventResponse::Unhandled
}

#[cfg(test)]
mod tests {
    use casement_core::hit_test::ButtonId;

    use super::*;

    #[test]
    fn single_click_on_the_caption_drags() {
        assert_eq!(caption_action(&HitRegion::Caption, 1, true, false), Some(CaptionAction::Drag));
        assert_eq!(caption_action(&HitRegion::Caption, 1, false, true), Some(CaptionAction::Drag));
    }

    #[test]
    fn double_click_zooms_resizable_windows() {
        assert_eq!(caption_action(&HitRegion::Caption, 2, true, false), Some(CaptionAction::Zoom));
        assert_eq!(caption_action(&HitRegion::Caption, 3, true, false), Some(CaptionAction::Zoom));
    }

    #[test]
    fn double_click_is_swallowed_when_zoom_is_unavailable() {
        assert_eq!(
            caption_action(&HitRegion::Caption, 2, false, false),
            Some(CaptionAction::Ignore)
        );
        assert_eq!(
            caption_action(&HitRegion::Caption, 2, true, true),
            Some(CaptionAction::Ignore)
        );
    }

    #[test]
    fn other_regions_belong_to_the_view() {
        for region in [
            HitRegion::Client,
            HitRegion::Top,
            HitRegion::None,
            HitRegion::CustomButton(ButtonId::MAXIMIZE),
        ] {
            assert_eq!(caption_action(&region, 1, true, false), None, "{region:?}");
            assert_eq!(caption_action(&region, 2, true, false), None, "{region:?}");
        }
    }

    #[test]
    fn locations_are_flipped_to_the_top_left_origin() {
        let top_left = flip_location(LogicalPosition::new(0.0, 600.0), 600.0, 1.0);
        assert_eq!(top_left, PhysicalPosition::new(0, 0));

        let caption = flip_location(LogicalPosition::new(100.0, 590.0), 600.0, 2.0);
        assert_eq!(caption, PhysicalPosition::new(200, 20));
    }
}
