//! Window state and chrome setup for `NSWindow`.

use casement_core::config::{ChromeFeatures, WindowChromeConfig};
use casement_core::dpi::LogicalPosition;
use casement_core::error::ChromeError;
use casement_core::metrics::BorderMetrics;
use objc2::rc::Retained;
use objc2::{MainThreadMarker, MainThreadOnly};
use objc2_app_kit::{
    NSAutoresizingMaskOptions, NSButton, NSView, NSWindow, NSWindowAnimationBehavior,
    NSWindowButton, NSWindowStyleMask, NSWindowTitleVisibility,
};
use objc2_foundation::{NSPoint, NSRect, NSSize};
use tracing::{debug, warn};

/// Size of the box hosting the traffic lights, in points.
const TRAFFIC_LIGHTS_SIZE: NSSize = NSSize { width: 72.0, height: 30.0 };

pub(crate) fn scale_factor(window: &NSWindow) -> f64 {
    window.backingScaleFactor() as _
}

/// AppKit resizes from a band just outside the frame, so the window itself has no resize edges
/// unless the configuration asks for some.
pub(crate) fn border_metrics(window: &NSWindow, config: &WindowChromeConfig) -> BorderMetrics {
    BorderMetrics::new(0, 0, scale_factor(window)).with_override(config.border_width_override)
}

pub(crate) fn is_zoomed(window: &NSWindow) -> bool {
    // because `isZoomed` doesn't work if the window's borderless,
    // we make it resizable temporarily.
    let curr_mask = window.styleMask();

    let required = NSWindowStyleMask::Titled | NSWindowStyleMask::Resizable;
    let needs_temp_mask = !curr_mask.contains(required);
    if needs_temp_mask {
        window.setStyleMask(curr_mask | required);
    }

    let is_zoomed = window.isZoomed();

    // Roll back temp styles
    if needs_temp_mask {
        window.setStyleMask(curr_mask);
    }

    is_zoomed
}

pub(crate) fn is_full_screen(window: &NSWindow) -> bool {
    match window.screen() {
        Some(screen) => window.frame() == screen.frame(),
        None => {
            debug!("window is not on any screen, assuming not full-screen");
            false
        },
    }
}

pub(crate) fn is_resizable(window: &NSWindow) -> bool {
    window.styleMask().contains(NSWindowStyleMask::Resizable)
}

/// Style mask merging the title bar into the content view, keeping unrelated bits of `mask`.
pub(crate) fn chrome_style_mask(
    mask: NSWindowStyleMask,
    config: &WindowChromeConfig,
) -> NSWindowStyleMask {
    let mut mask = mask
        | NSWindowStyleMask::Titled
        | NSWindowStyleMask::Closable
        | NSWindowStyleMask::Miniaturizable
        | NSWindowStyleMask::FullSizeContentView;
    if config.resizable {
        mask |= NSWindowStyleMask::Resizable;
    } else {
        mask &= !NSWindowStyleMask::Resizable;
    }
    mask
}

pub(crate) fn install(window: &NSWindow, config: &WindowChromeConfig) -> Result<(), ChromeError> {
    let mask = window.styleMask();
    if mask.contains(NSWindowStyleMask::FullScreen) && is_resizable(window) != config.resizable {
        // AppKit owns the mask while full-screen; it is applied on the next install.
        warn!("not changing resizability of a full-screen window");
    } else {
        window.setStyleMask(chrome_style_mask(mask, config));
    }

    window.setTitlebarAppearsTransparent(true);
    window.setTitleVisibility(NSWindowTitleVisibility::Hidden);
    window.setMovableByWindowBackground(false);
    window.setHasShadow(config.features.contains(ChromeFeatures::SHADOW));

    let behavior = if config.features.contains(ChromeFeatures::ANIMATIONS) {
        NSWindowAnimationBehavior::Default
    } else {
        NSWindowAnimationBehavior::None
    };
    unsafe { window.setAnimationBehavior(behavior) };

    // We edit the button directly, since the mask alone leaves it clickable.
    match window.standardWindowButton(NSWindowButton::ZoomButton) {
        Some(button) => button.setEnabled(config.resizable),
        None => debug!("window has no zoom button"),
    }

    debug!(
        resizable = config.resizable,
        features = ?config.features,
        "installed window chrome"
    );
    Ok(())
}

fn traffic_lights(window: &NSWindow) -> Option<[Retained<NSButton>; 3]> {
    Some([
        window.standardWindowButton(NSWindowButton::CloseButton)?,
        window.standardWindowButton(NSWindowButton::MiniaturizeButton)?,
        window.standardWindowButton(NSWindowButton::ZoomButton)?,
    ])
}

/// Move the close / minimize / zoom buttons into a box whose top-left corner is at `origin`,
/// in points from the top-left corner of the content view.
///
/// The buttons are moved out of AppKit's title bar view, so they stay where they are put across
/// resizes and full-screen transitions.
pub(crate) fn set_traffic_lights_position(
    window: &NSWindow,
    origin: LogicalPosition<f64>,
) -> Result<(), ChromeError> {
    let mtm = MainThreadMarker::from(window);
    let (Some(content), Some(buttons)) = (window.contentView(), traffic_lights(window)) else {
        return Err(os_error!("window has no content view or no standard buttons").into());
    };

    let content_height = content.frame().size.height;
    let frame = NSRect::new(
        NSPoint::new(origin.x, content_height - origin.y - TRAFFIC_LIGHTS_SIZE.height),
        TRAFFIC_LIGHTS_SIZE,
    );

    // Reuse the box from an earlier call.
    let current = unsafe { buttons[0].superview() };
    let host = match current.filter(|view| {
        unsafe { view.superview() }.is_some_and(|parent| std::ptr::eq(&*parent, &*content))
    }) {
        Some(host) => {
            host.setFrame(frame);
            host
        },
        None => {
            let host = NSView::initWithFrame(NSView::alloc(mtm), frame);
            host.setAutoresizingMask(NSAutoresizingMaskOptions::ViewMinYMargin);
            content.addSubview(&host);
            for button in &buttons {
                host.addSubview(button);
            }
            host
        },
    };

    debug!(x = origin.x, y = origin.y, "moved traffic lights ({:?})", host.frame());
    Ok(())
}
