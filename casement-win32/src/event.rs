//! Routes window messages to the chrome engine.

use std::{io, mem};

use casement_core::backend::{ChromeContext, EventResponse};
use casement_core::capture::HoverChange;
use casement_core::config::WindowChromeConfig;
use casement_core::dpi::{PhysicalPosition, PhysicalSize};
use casement_core::frame::{self, FrameState};
use casement_core::hit_test::{ButtonId, HitRegion, HitTestQuery};
use casement_core::metrics::BorderMetrics;
use casement_core::title_bar::MaximizeButtonIcon;
use tracing::{debug, trace};
use windows_sys::Win32::Foundation::{HWND, LPARAM, POINT, WPARAM};
use windows_sys::Win32::Graphics::Gdi::ScreenToClient;
use windows_sys::Win32::UI::Input::KeyboardAndMouse::{
    TrackMouseEvent, TME_LEAVE, TME_NONCLIENT, TRACKMOUSEEVENT,
};
use windows_sys::Win32::UI::WindowsAndMessaging::{
    HTBOTTOM, HTBOTTOMLEFT, HTBOTTOMRIGHT, HTCAPTION, HTCLIENT, HTCLOSE, HTLEFT, HTMAXBUTTON,
    HTMINBUTTON, HTNOWHERE, HTRIGHT, HTTOP, HTTOPLEFT, HTTOPRIGHT, NCCALCSIZE_PARAMS,
    SIZE_MAXIMIZED, SIZE_RESTORED, WM_MOUSELEAVE, WM_MOVE, WM_NCCALCSIZE, WM_NCHITTEST,
    WM_NCLBUTTONDBLCLK, WM_NCLBUTTONDOWN, WM_NCLBUTTONUP, WM_NCMOUSELEAVE, WM_SHOWWINDOW,
    WM_SIZE, WVR_REDRAW,
};

use crate::util::{self, WindowArea};
use crate::{install, monitor, Win32Backend};

/// The live state of a window, as the message handlers read it.
pub(crate) trait WindowQuery {
    /// Convert a screen position to client coordinates.
    fn screen_to_client(&self, point: POINT) -> Result<PhysicalPosition<i32>, io::Error>;
    fn client_size(&self) -> Result<PhysicalSize<u32>, io::Error>;
    fn metrics(&self, config: &WindowChromeConfig) -> BorderMetrics;
    fn is_maximized(&self) -> bool;
    fn is_full_screen(&self) -> bool;
    /// Ask for `WM_NCMOUSELEAVE` once the pointer leaves the non-client area.
    fn track_mouse_leave(&self);
    fn refresh_frame(&self);
}

/// A real window.
pub(crate) struct LiveWindow<'a> {
    backend: &'a Win32Backend,
    hwnd: HWND,
}

impl<'a> LiveWindow<'a> {
    pub(crate) fn new(backend: &'a Win32Backend, hwnd: HWND) -> Self {
        Self { backend, hwnd }
    }
}

impl WindowQuery for LiveWindow<'_> {
    fn screen_to_client(&self, mut point: POINT) -> Result<PhysicalPosition<i32>, io::Error> {
        util::win_to_err(unsafe { ScreenToClient(self.hwnd, &mut point) })?;
        Ok(PhysicalPosition::new(point.x, point.y))
    }

    fn client_size(&self) -> Result<PhysicalSize<u32>, io::Error> {
        let client = WindowArea::Client.get_rect(self.hwnd)?;
        Ok(PhysicalSize::new(client.right.max(0) as u32, client.bottom.max(0) as u32))
    }

    fn metrics(&self, config: &WindowChromeConfig) -> BorderMetrics {
        self.backend.metrics(self.hwnd, config)
    }

    fn is_maximized(&self) -> bool {
        util::is_maximized(self.hwnd)
    }

    fn is_full_screen(&self) -> bool {
        monitor::is_full_screen(self.hwnd)
    }

    fn track_mouse_leave(&self) {
        let mut event = TRACKMOUSEEVENT {
            cbSize: mem::size_of::<TRACKMOUSEEVENT>() as u32,
            dwFlags: TME_LEAVE | TME_NONCLIENT,
            hwndTrack: self.hwnd,
            dwHoverTime: 0,
        };
        if let Err(err) = util::win_to_err(unsafe { TrackMouseEvent(&mut event) }) {
            debug!("TrackMouseEvent failed: {err}");
        }
    }

    fn refresh_frame(&self) {
        install::refresh_frame(self.hwnd);
    }
}

/// The function pointer for handling messages.
type MessageHandler =
    fn(&dyn WindowQuery, WPARAM, LPARAM, &mut ChromeContext<'_>) -> EventResponse;

const HANDLERS: &[(u32, MessageHandler)] = &[
    (WM_NCHITTEST, handle_nchittest),
    (WM_NCCALCSIZE, handle_nccalcsize),
    (WM_NCLBUTTONDOWN, handle_nclbuttondown),
    // A fast second click on a custom button still has to reach it.
    (WM_NCLBUTTONDBLCLK, handle_nclbuttondown),
    (WM_NCLBUTTONUP, handle_nclbuttonup),
    (WM_NCMOUSELEAVE, handle_mouseleave),
    (WM_MOUSELEAVE, handle_mouseleave),
    (WM_MOVE, handle_move),
    (WM_SIZE, handle_size),
    (WM_SHOWWINDOW, handle_showwindow),
];

pub(crate) fn handle_message(
    window: &dyn WindowQuery,
    msg: u32,
    wparam: WPARAM,
    lparam: LPARAM,
    cx: &mut ChromeContext<'_>,
) -> EventResponse {
    match HANDLERS.iter().find(|(id, _)| *id == msg) {
        Some((_, handler)) => handler(window, wparam, lparam, cx),
        None => EventResponse::Unhandled,
    }
}

/// The hit-test code the OS expects for `region`.
///
/// The well-known buttons use the codes of the native buttons they stand in for; `HTMAXBUTTON`
/// in particular is what brings up the snap layout flyout. Other custom buttons are plain
/// client area to the OS.
pub(crate) fn encode_hit_region(region: &HitRegion) -> u32 {
    match region {
        HitRegion::TopLeft => HTTOPLEFT,
        HitRegion::Top => HTTOP,
        HitRegion::TopRight => HTTOPRIGHT,
        HitRegion::Left => HTLEFT,
        HitRegion::Right => HTRIGHT,
        HitRegion::BottomLeft => HTBOTTOMLEFT,
        HitRegion::Bottom => HTBOTTOM,
        HitRegion::BottomRight => HTBOTTOMRIGHT,
        HitRegion::Caption => HTCAPTION,
        HitRegion::CustomButton(id) if *id == ButtonId::MAXIMIZE => HTMAXBUTTON,
        HitRegion::CustomButton(id) if *id == ButtonId::MINIMIZE => HTMINBUTTON,
        HitRegion::CustomButton(id) if *id == ButtonId::CLOSE => HTCLOSE,
        HitRegion::CustomButton(_) | HitRegion::Client => HTCLIENT,
        HitRegion::None => HTNOWHERE,
    }
}

/// The region the capture tracker should see.
///
/// Buttons reported as `HTCLIENT` get their mouse input from the OS like any client control,
/// so they are client area to the tracker too.
fn tracked_region(region: HitRegion) -> HitRegion {
    match region {
        HitRegion::CustomButton(_) if encode_hit_region(&region) == HTCLIENT => HitRegion::Client,
        region => region,
    }
}

/// Classify the screen position packed in `lparam`.
fn hit_test(
    window: &dyn WindowQuery,
    lparam: LPARAM,
    cx: &ChromeContext<'_>,
) -> Result<HitRegion, io::Error> {
    let point = POINT {
        x: util::get_x_lparam(lparam as u32) as i32,
        y: util::get_y_lparam(lparam as u32) as i32,
    };

    let layout = cx.title_bar.layout();
    let query = HitTestQuery {
        pointer: window.screen_to_client(point)?,
        window_size: window.client_size()?,
        metrics: window.metrics(cx.config),
        config: cx.config,
        maximized: window.is_maximized(),
        title_bar: &layout,
    };
    Ok(query.classify())
}

fn handle_nchittest(
    window: &dyn WindowQuery,
    _: WPARAM,
    lparam: LPARAM,
    cx: &mut ChromeContext<'_>,
) -> EventResponse {
    let region = match hit_test(window, lparam, cx) {
        Ok(region) => region,
        Err(err) => {
            debug!("hit-test geometry unavailable: {err}");
            return EventResponse::Unhandled;
        },
    };
    trace!(?region, "WM_NCHITTEST");
    let code = encode_hit_region(&region);

    if let HoverChange::Entered(_) = cx.tracker.hover(cx.title_bar, &tracked_region(region)) {
        window.track_mouse_leave();
    }
    EventResponse::Handled(code as isize)
}

fn handle_nccalcsize(
    window: &dyn WindowQuery,
    wparam: WPARAM,
    lparam: LPARAM,
    cx: &mut ChromeContext<'_>,
) -> EventResponse {
    if wparam == 0 {
        return EventResponse::Unhandled;
    }

    let params = unsafe { &mut *(lparam as *mut NCCALCSIZE_PARAMS) };
    let state =
        FrameState { maximized: window.is_maximized(), full_screen: window.is_full_screen() };
    let proposed = util::frame_rect(params.rgrc[0]);
    let adjusted = frame::adjust_client_rect(proposed, state, window.metrics(cx.config));
    params.rgrc[0] = util::native_rect(adjusted);

    trace!(?state, ?adjusted, "WM_NCCALCSIZE");
    EventResponse::Handled(WVR_REDRAW as isize)
}

fn handle_nclbuttondown(
    window: &dyn WindowQuery,
    _: WPARAM,
    lparam: LPARAM,
    cx: &mut ChromeContext<'_>,
) -> EventResponse {
    let Ok(region) = hit_test(window, lparam, cx) else {
        return EventResponse::Unhandled;
    };

    if cx.tracker.press(cx.title_bar, &tracked_region(region)) {
        trace!("custom button pressed");
        EventResponse::Handled(0)
    } else {
        EventResponse::Unhandled
    }
}

fn handle_nclbuttonup(
    window: &dyn WindowQuery,
    _: WPARAM,
    lparam: LPARAM,
    cx: &mut ChromeContext<'_>,
) -> EventResponse {
    let Ok(region) = hit_test(window, lparam, cx) else {
        return EventResponse::Unhandled;
    };

    match cx.tracker.release(cx.title_bar, &tracked_region(region), || window.is_maximized()) {
        Some(button) => {
            trace!(%button, "custom button clicked");
            EventResponse::Handled(0)
        },
        None => EventResponse::Unhandled,
    }
}

fn handle_mouseleave(
    _: &dyn WindowQuery,
    _: WPARAM,
    _: LPARAM,
    cx: &mut ChromeContext<'_>,
) -> EventResponse {
    cx.tracker.leave(cx.title_bar);
    EventResponse::Unhandled
}

fn handle_move(
    window: &dyn WindowQuery,
    _: WPARAM,
    _: LPARAM,
    _: &mut ChromeContext<'_>,
) -> EventResponse {
    // Without this the DWM shadow can lag behind after moving between monitors.
    window.refresh_frame();
    EventResponse::Unhandled
}

fn handle_size(
    _: &dyn WindowQuery,
    wparam: WPARAM,
    _: LPARAM,
    cx: &mut ChromeContext<'_>,
) -> EventResponse {
    match wparam as u32 {
        SIZE_MAXIMIZED => cx.title_bar.set_maximize_icon(MaximizeButtonIcon::Restore),
        SIZE_RESTORED => cx.title_bar.set_maximize_icon(MaximizeButtonIcon::Maximize),
        _ => (),
    }
    EventResponse::Unhandled
}

fn handle_showwindow(
    _: &dyn WindowQuery,
    wparam: WPARAM,
    _: LPARAM,
    cx: &mut ChromeContext<'_>,
) -> EventResponse {
    if wparam == 0 {
        cx.tracker.reset(cx.title_bar);
    }
    EventResponse::Unhandled
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use casement_core::capture::CaptureTracker;
    use casement_core::hit_test::ButtonGeometry;
    use casement_core::title_bar::{
        ButtonEvent, MaximizeButtonVisualState, TitleBar, TitleBarLayout,
    };
    use windows_sys::Win32::Foundation::RECT;
    use windows_sys::Win32::UI::WindowsAndMessaging::SIZE_MINIMIZED;

    use super::*;

    /// Screen position of the client area's top-left corner.
    const ORIGIN: (i32, i32) = (100, 200);

    #[derive(Default)]
    struct FakeWindow {
        maximized: Cell<bool>,
        full_screen: Cell<bool>,
        leave_requests: Cell<u32>,
        frame_refreshes: Cell<u32>,
    }

    impl WindowQuery for FakeWindow {
        fn screen_to_client(&self, point: POINT) -> Result<PhysicalPosition<i32>, io::Error> {
            Ok(PhysicalPosition::new(point.x - ORIGIN.0, point.y - ORIGIN.1))
        }

        fn client_size(&self) -> Result<PhysicalSize<u32>, io::Error> {
            Ok(PhysicalSize::new(800, 600))
        }

        fn metrics(&self, config: &WindowChromeConfig) -> BorderMetrics {
            BorderMetrics::new(8, 8, 1.0).with_override(config.border_width_override)
        }

        fn is_maximized(&self) -> bool {
            self.maximized.get()
        }

        fn is_full_screen(&self) -> bool {
            self.full_screen.get()
        }

        fn track_mouse_leave(&self) {
            self.leave_requests.set(self.leave_requests.get() + 1);
        }

        fn refresh_frame(&self) {
            self.frame_refreshes.set(self.frame_refreshes.get() + 1);
        }
    }

    #[derive(Default)]
    struct RecordingTitleBar {
        events: Vec<(ButtonId, ButtonEvent)>,
        states: Vec<(ButtonId, MaximizeButtonVisualState)>,
        icons: Vec<MaximizeButtonIcon>,
    }

    impl TitleBar for RecordingTitleBar {
        fn layout(&self) -> TitleBarLayout {
            TitleBarLayout {
                height: 30,
                buttons: vec![
                    (ButtonId::new("pin"), ButtonGeometry::new((650, 0), (50, 30))),
                    (ButtonId::MAXIMIZE, ButtonGeometry::new((700, 0), (50, 30))),
                ],
                client_controls: Vec::new(),
            }
        }

        fn dispatch(&mut self, id: &ButtonId, event: ButtonEvent) {
            self.events.push((id.clone(), event));
        }

        fn set_visual_state(&mut self, id: &ButtonId, state: MaximizeButtonVisualState) {
            self.states.push((id.clone(), state));
        }

        fn set_maximize_icon(&mut self, icon: MaximizeButtonIcon) {
            self.icons.push(icon);
        }
    }

    struct Harness {
        window: FakeWindow,
        config: WindowChromeConfig,
        title_bar: RecordingTitleBar,
        tracker: CaptureTracker,
    }

    impl Harness {
        fn new() -> Self {
            Self {
                window: FakeWindow::default(),
                config: WindowChromeConfig::default(),
                title_bar: RecordingTitleBar::default(),
                tracker: CaptureTracker::new(),
            }
        }

        fn send(&mut self, msg: u32, wparam: WPARAM, lparam: LPARAM) -> EventResponse {
            let mut cx = ChromeContext {
                config: &self.config,
                title_bar: &mut self.title_bar,
                tracker: &mut self.tracker,
            };
            handle_message(&self.window, msg, wparam, lparam, &mut cx)
        }

        /// Send a pointer message for client position `(x, y)`.
        fn send_at(&mut self, msg: u32, (x, y): (i32, i32)) -> EventResponse {
            self.send(msg, 0, screen_lparam(x + ORIGIN.0, y + ORIGIN.1))
        }
    }

    fn screen_lparam(x: i32, y: i32) -> LPARAM {
        (((y as u16 as u32) << 16) | (x as u16 as u32)) as i32 as LPARAM
    }

    #[test]
    fn edges_use_native_codes() {
        assert_eq!(encode_hit_region(&HitRegion::TopLeft), HTTOPLEFT);
        assert_eq!(encode_hit_region(&HitRegion::Bottom), HTBOTTOM);
        assert_eq!(encode_hit_region(&HitRegion::Right), HTRIGHT);
        assert_eq!(encode_hit_region(&HitRegion::Caption), HTCAPTION);
    }

    #[test]
    fn well_known_buttons_stand_in_for_native_ones() {
        assert_eq!(encode_hit_region(&HitRegion::CustomButton(ButtonId::MAXIMIZE)), HTMAXBUTTON);
        assert_eq!(encode_hit_region(&HitRegion::CustomButton(ButtonId::MINIMIZE)), HTMINBUTTON);
        assert_eq!(encode_hit_region(&HitRegion::CustomButton(ButtonId::CLOSE)), HTCLOSE);
        assert_eq!(encode_hit_region(&HitRegion::CustomButton(ButtonId::new("pin"))), HTCLIENT);
    }

    #[test]
    fn client_and_outside() {
        assert_eq!(encode_hit_region(&HitRegion::Client), HTCLIENT);
        assert_eq!(encode_hit_region(&HitRegion::None), HTNOWHERE);
    }

    #[test]
    fn every_routed_message_has_one_handler() {
        for (i, (msg, _)) in HANDLERS.iter().enumerate() {
            assert!(HANDLERS[i + 1..].iter().all(|(other, _)| other != msg), "{msg:#x}");
        }
    }

    #[test]
    fn unrouted_messages_are_left_alone() {
        let mut harness = Harness::new();
        assert_eq!(harness.send(0x000F, 0, 0), EventResponse::Unhandled);
    }

    #[test]
    fn hit_test_answers_with_region_codes() {
        let mut harness = Harness::new();
        let code = |region: u32| EventResponse::Handled(region as isize);

        assert_eq!(harness.send_at(WM_NCHITTEST, (2, 2)), code(HTTOPLEFT));
        assert_eq!(harness.send_at(WM_NCHITTEST, (400, 15)), code(HTCAPTION));
        assert_eq!(harness.send_at(WM_NCHITTEST, (400, 300)), code(HTCLIENT));
        assert_eq!(harness.send_at(WM_NCHITTEST, (900, 300)), code(HTNOWHERE));

        harness.window.maximized.set(true);
        assert_eq!(harness.send_at(WM_NCHITTEST, (400, 2)), code(HTCLIENT));
    }

    #[test]
    fn hovering_the_maximize_button_requests_leave_tracking_once() {
        let mut harness = Harness::new();

        let response = harness.send_at(WM_NCHITTEST, (720, 15));
        assert_eq!(response, EventResponse::Handled(HTMAXBUTTON as isize));
        assert_eq!(harness.tracker.hovered(), Some(&ButtonId::MAXIMIZE));
        assert_eq!(harness.window.leave_requests.get(), 1);

        harness.send_at(WM_NCHITTEST, (730, 20));
        assert_eq!(harness.window.leave_requests.get(), 1);
        assert_eq!(
            harness.title_bar.states.last(),
            Some(&(ButtonId::MAXIMIZE, MaximizeButtonVisualState::Hover))
        );

        assert_eq!(harness.send(WM_NCMOUSELEAVE, 0, 0), EventResponse::Unhandled);
        assert_eq!(harness.tracker.hovered(), None);
        assert_eq!(
            harness.title_bar.states.last(),
            Some(&(ButtonId::MAXIMIZE, MaximizeButtonVisualState::Normal))
        );
    }

    #[test]
    fn client_coded_buttons_are_not_tracked_as_non_client() {
        let mut harness = Harness::new();

        for _ in 0..3 {
            let response = harness.send_at(WM_NCHITTEST, (660, 15));
            assert_eq!(response, EventResponse::Handled(HTCLIENT as isize));
        }
        assert_eq!(harness.window.leave_requests.get(), 0);
        assert_eq!(harness.tracker.hovered(), None);
        assert!(harness.title_bar.states.is_empty());

        assert_eq!(harness.send_at(WM_NCLBUTTONDOWN, (660, 15)), EventResponse::Unhandled);
        assert!(harness.title_bar.events.is_empty());
    }

    #[test]
    fn moving_from_maximize_to_a_client_coded_button_clears_hover() {
        let mut harness = Harness::new();
        harness.send_at(WM_NCHITTEST, (720, 15));
        harness.send_at(WM_NCHITTEST, (660, 15));

        assert_eq!(harness.tracker.hovered(), None);
        assert_eq!(
            harness.title_bar.states.last(),
            Some(&(ButtonId::MAXIMIZE, MaximizeButtonVisualState::Normal))
        );
    }

    #[test]
    fn click_on_the_maximize_button() {
        let mut harness = Harness::new();

        assert_eq!(harness.send_at(WM_NCLBUTTONDOWN, (720, 15)), EventResponse::Handled(0));
        // The title bar maximizes the window in response to the release.
        harness.window.maximized.set(true);
        assert_eq!(harness.send_at(WM_NCLBUTTONUP, (720, 15)), EventResponse::Handled(0));

        assert_eq!(harness.title_bar.events, [
            (ButtonId::MAXIMIZE, ButtonEvent::Press),
            (ButtonId::MAXIMIZE, ButtonEvent::Release),
        ]);
        assert_eq!(harness.title_bar.icons, [MaximizeButtonIcon::Restore]);
        assert_eq!(harness.tracker.pressed(), None);
    }

    #[test]
    fn double_click_on_the_button_is_a_press() {
        let mut harness = Harness::new();
        assert_eq!(harness.send_at(WM_NCLBUTTONDBLCLK, (720, 15)), EventResponse::Handled(0));
        assert_eq!(harness.tracker.pressed(), Some(&ButtonId::MAXIMIZE));
    }

    #[test]
    fn caption_presses_go_to_the_os() {
        let mut harness = Harness::new();
        assert_eq!(harness.send_at(WM_NCLBUTTONDOWN, (400, 15)), EventResponse::Unhandled);
        assert_eq!(harness.send_at(WM_NCLBUTTONDBLCLK, (400, 15)), EventResponse::Unhandled);
        assert_eq!(harness.send_at(WM_NCLBUTTONUP, (400, 15)), EventResponse::Unhandled);
        assert!(harness.title_bar.events.is_empty());
    }

    #[test]
    fn release_outside_the_pressed_button_cancels_the_click() {
        let mut harness = Harness::new();
        harness.send_at(WM_NCLBUTTONDOWN, (720, 15));

        assert_eq!(harness.send_at(WM_NCLBUTTONUP, (400, 15)), EventResponse::Unhandled);
        assert_eq!(harness.title_bar.events, [(ButtonId::MAXIMIZE, ButtonEvent::Press)]);
        assert!(harness.title_bar.icons.is_empty());
    }

    #[test]
    fn nccalcsize_without_rects_is_left_to_the_os() {
        let mut harness = Harness::new();
        assert_eq!(harness.send(WM_NCCALCSIZE, 0, 0), EventResponse::Unhandled);
    }

    /// Send `WM_NCCALCSIZE` for a monitor-sized outer rect, returning the adjusted client rect.
    fn calc_size(harness: &mut Harness) -> (i32, i32, i32, i32) {
        let mut params: NCCALCSIZE_PARAMS = unsafe { mem::zeroed() };
        params.rgrc[0] = RECT { left: -8, top: -8, right: 1928, bottom: 1088 };
        let response =
            harness.send(WM_NCCALCSIZE, 1, &mut params as *mut NCCALCSIZE_PARAMS as LPARAM);
        assert_eq!(response, EventResponse::Handled(WVR_REDRAW as isize));
        let rect = params.rgrc[0];
        (rect.left, rect.top, rect.right, rect.bottom)
    }

    #[test]
    fn nccalcsize_by_window_state() {
        let mut harness = Harness::new();

        assert_eq!(calc_size(&mut harness), (-8, -8, 1928, 1088));

        harness.window.maximized.set(true);
        assert_eq!(calc_size(&mut harness), (0, 0, 1920, 1080));

        harness.window.full_screen.set(true);
        assert_eq!(calc_size(&mut harness), (-8, -8, 1928, 1088));
    }

    #[test]
    fn hiding_the_window_resets_the_tracker() {
        let mut harness = Harness::new();
        harness.send_at(WM_NCHITTEST, (720, 15));
        harness.send_at(WM_NCLBUTTONDOWN, (720, 15));

        assert_eq!(harness.send(WM_SHOWWINDOW, 1, 0), EventResponse::Unhandled);
        assert_eq!(harness.tracker.hovered(), Some(&ButtonId::MAXIMIZE));

        assert_eq!(harness.send(WM_SHOWWINDOW, 0, 0), EventResponse::Unhandled);
        assert_eq!(harness.tracker.hovered(), None);
        assert_eq!(harness.tracker.pressed(), None);
        assert_eq!(
            harness.title_bar.states.last(),
            Some(&(ButtonId::MAXIMIZE, MaximizeButtonVisualState::Normal))
        );
    }

    #[test]
    fn size_messages_update_the_maximize_icon() {
        let mut harness = Harness::new();
        harness.send(WM_SIZE, SIZE_MAXIMIZED as WPARAM, 0);
        harness.send(WM_SIZE, SIZE_MINIMIZED as WPARAM, 0);
        harness.send(WM_SIZE, SIZE_RESTORED as WPARAM, 0);

        assert_eq!(harness.title_bar.icons, [
            MaximizeButtonIcon::Restore,
            MaximizeButtonIcon::Maximize
        ]);
    }

    #[test]
    fn moves_refresh_the_frame() {
        let mut harness = Harness::new();
        assert_eq!(harness.send(WM_MOVE, 0, 0), EventResponse::Unhandled);
        assert_eq!(harness.window.frame_refreshes.get(), 1);
    }
}
