use std::fmt;
use std::rc::Rc;

use rwh_06::{HandleError, HasWindowHandle, RawWindowHandle};
use tracing::{debug, trace};

use crate::backend::{ChromeBackend, ChromeContext, EventResponse, NativeEvent};
use crate::capture::CaptureTracker;
use crate::config::WindowChromeConfig;
use crate::dpi::{PhysicalPosition, PhysicalSize};
use crate::error::{ChromeError, OsError};
use crate::frame::FrameState;
use crate::hit_test::{HitRegion, HitTestQuery};
use crate::metrics::BorderMetrics;
use crate::title_bar::{MaximizeButtonIcon, TitleBar};

/// The chrome of one window.
///
/// Ties the window's configuration, its custom title bar and the hover / press state of the
/// title bar buttons to the shared backend. The host keeps one per window, next to the native
/// window it belongs to, and routes the window's messages through
/// [`handle_native_message`](Self::handle_native_message).
///
/// The window itself is borrowed for each call and never stored.
pub struct WindowChrome<T: TitleBar> {
    backend: Rc<dyn ChromeBackend>,
    config: WindowChromeConfig,
    title_bar: T,
    tracker: CaptureTracker,
}

impl<T: TitleBar> WindowChrome<T> {
    /// Install the chrome on `window`.
    ///
    /// # Errors
    ///
    /// Fails if the window's handle is unavailable, if the backend does not understand the
    /// handle, or if the native style could not be changed.
    pub fn new(
        backend: Rc<dyn ChromeBackend>,
        window: &impl HasWindowHandle,
        config: WindowChromeConfig,
        mut title_bar: T,
    ) -> Result<Self, ChromeError> {
        let raw = raw_handle(window).map_err(handle_error)?;
        backend.install(raw, &config)?;
        title_bar.set_maximize_icon(MaximizeButtonIcon::for_state(backend.is_maximized(raw)));

        Ok(Self { backend, config, title_bar, tracker: CaptureTracker::new() })
    }

    pub fn config(&self) -> &WindowChromeConfig {
        &self.config
    }

    pub fn backend(&self) -> &dyn ChromeBackend {
        &*self.backend
    }

    pub fn title_bar(&self) -> &T {
        &self.title_bar
    }

    pub fn title_bar_mut(&mut self) -> &mut T {
        &mut self.title_bar
    }

    pub fn capture_tracker(&self) -> &CaptureTracker {
        &self.tracker
    }

    /// Allow or forbid resizing, updating the native style right away.
    ///
    /// # Errors
    ///
    /// See [`WindowChrome::new`]. The new value is kept even on failure, so hit-testing follows
    /// it in any case.
    pub fn set_resizable(
        &mut self,
        window: &impl HasWindowHandle,
        resizable: bool,
    ) -> Result<(), ChromeError> {
        if self.config.resizable == resizable {
            return Ok(());
        }
        self.config.resizable = resizable;
        debug!(resizable, "changing window resizability");

        let raw = raw_handle(window).map_err(handle_error)?;
        self.backend.install(raw, &self.config)
    }

    /// Replace the platform's resize border width; `None` restores it.
    pub fn set_border_width_override(&mut self, width: Option<u32>) {
        self.config.border_width_override = width;
    }

    /// Route one native message of the window.
    ///
    /// Must be called for every message, before the platform's default processing. When the
    /// response is [`EventResponse::Handled`], skip the default processing and return the
    /// contained value to the OS.
    pub fn handle_native_message(
        &mut self,
        window: &impl HasWindowHandle,
        event: NativeEvent,
    ) -> EventResponse {
        let raw = match raw_handle(window) {
            Ok(raw) => raw,
            Err(err) => {
                trace!("window handle unavailable, leaving message alone: {err}");
                return EventResponse::Unhandled;
            },
        };

        let mut cx = ChromeContext {
            config: &self.config,
            title_bar: &mut self.title_bar,
            tracker: &mut self.tracker,
        };
        self.backend.handle_event(raw, event, &mut cx)
    }

    /// Tell the chrome that the window was maximized, restored or minimized.
    ///
    /// Hover and press state is dropped, and the maximize icon is refreshed from the live window
    /// state.
    pub fn window_state_changed(&mut self, window: &impl HasWindowHandle) {
        self.tracker.reset(&mut self.title_bar);
        let Ok(raw) = raw_handle(window) else {
            return;
        };
        let icon = MaximizeButtonIcon::for_state(self.backend.is_maximized(raw));
        self.title_bar.set_maximize_icon(icon);
    }

    /// Current resize border metrics of the window.
    pub fn border_metrics(&self, window: &impl HasWindowHandle) -> BorderMetrics {
        match raw_handle(window) {
            Ok(raw) => self.backend.border_metrics(raw, &self.config),
            Err(_) => BorderMetrics::FALLBACK,
        }
    }

    /// Maximized / full-screen state of the window, as the frame adjuster sees it.
    pub fn frame_state(&self, window: &impl HasWindowHandle) -> FrameState {
        match raw_handle(window) {
            Ok(raw) => FrameState {
                maximized: self.backend.is_maximized(raw),
                full_screen: self.backend.is_full_screen(raw),
            },
            Err(_) => FrameState::default(),
        }
    }

    /// Classify a pointer position relative to the client area, against the live window state.
    ///
    /// This is what the backend answers the OS with; it is exposed for toolkits that have to
    /// pick a cursor or forward a click themselves.
    pub fn hit_test(
        &self,
        window: &impl HasWindowHandle,
        pointer: PhysicalPosition<i32>,
        window_size: PhysicalSize<u32>,
    ) -> HitRegion {
        let state = self.frame_state(window);
        let layout = self.title_bar.layout();
        HitTestQuery {
            pointer,
            window_size,
            metrics: self.border_metrics(window),
            config: &self.config,
            maximized: state.maximized,
            title_bar: &layout,
        }
        .classify()
    }
}

impl<T: TitleBar + fmt::Debug> fmt::Debug for WindowChrome<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WindowChrome")
            .field("backend", &self.backend)
            .field("config", &self.config)
            .field("title_bar", &self.title_bar)
            .field("tracker", &self.tracker)
            .finish()
    }
}

fn raw_handle(window: &impl HasWindowHandle) -> Result<RawWindowHandle, HandleError> {
    Ok(window.window_handle()?.as_raw())
}

fn handle_error(err: HandleError) -> ChromeError {
    OsError::new(line!(), file!(), err).into()
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::num::NonZeroIsize;

    use rwh_06::{Win32WindowHandle, WindowHandle};

    use super::*;
    use crate::error::NotSupportedError;
    use crate::hit_test::{ButtonGeometry, ButtonId};
    use crate::title_bar::{ButtonEvent, MaximizeButtonVisualState, TitleBarLayout};

    struct FakeWindow(RawWindowHandle);

    impl FakeWindow {
        fn new() -> Self {
            Self(Win32WindowHandle::new(NonZeroIsize::new(0x1234).unwrap()).into())
        }
    }

    impl HasWindowHandle for FakeWindow {
        fn window_handle(&self) -> Result<WindowHandle<'_>, HandleError> {
            // SAFETY: The handle is never dereferenced by the mock backend.
            Ok(unsafe { WindowHandle::borrow_raw(self.0) })
        }
    }

    struct GoneWindow;

    impl HasWindowHandle for GoneWindow {
        fn window_handle(&self) -> Result<WindowHandle<'_>, HandleError> {
            Err(HandleError::Unavailable)
        }
    }

    #[derive(Debug, Default)]
    struct MockBackend {
        maximized: Cell<bool>,
        resizable: Cell<bool>,
        installs: Cell<u32>,
        fail_install: Cell<bool>,
    }

    impl ChromeBackend for MockBackend {
        fn border_metrics(&self, _: RawWindowHandle, config: &WindowChromeConfig) -> BorderMetrics {
            BorderMetrics::new(8, 8, 1.0).with_override(config.border_width_override)
        }

        fn is_maximized(&self, _: RawWindowHandle) -> bool {
            self.maximized.get()
        }

        fn is_full_screen(&self, _: RawWindowHandle) -> bool {
            false
        }

        fn is_resizable(&self, _: RawWindowHandle) -> bool {
            self.resizable.get()
        }

        fn install(&self, _: RawWindowHandle, config: &WindowChromeConfig) -> Result<(), ChromeError> {
            if self.fail_install.get() {
                return Err(NotSupportedError::new("mock").into());
            }
            self.installs.set(self.installs.get() + 1);
            self.resizable.set(config.resizable);
            Ok(())
        }

        fn handle_event(
            &self,
            _: RawWindowHandle,
            event: NativeEvent,
            cx: &mut ChromeContext<'_>,
        ) -> EventResponse {
            let NativeEvent::Win32 { msg, .. } = event else {
                return EventResponse::Unhandled;
            };
            // Pretend every message is a hover over the maximize button.
            let region = HitRegion::CustomButton(ButtonId::MAXIMIZE);
            cx.tracker.hover(cx.title_bar, &region);
            EventResponse::Handled(msg as isize)
        }

        fn as_any(&self) -> &dyn std::any::Any {
            self
        }
    }

    #[derive(Debug, Default)]
    struct RecordingTitleBar {
        icons: Vec<MaximizeButtonIcon>,
        states: Vec<MaximizeButtonVisualState>,
    }

    impl TitleBar for RecordingTitleBar {
        fn layout(&self) -> TitleBarLayout {
            TitleBarLayout {
                height: 30,
                buttons: vec![(ButtonId::MAXIMIZE, ButtonGeometry::new((750, 0), (50, 30)))],
                client_controls: Vec::new(),
            }
        }

        fn dispatch(&mut self, _: &ButtonId, _: ButtonEvent) {}

        fn set_visual_state(&mut self, _: &ButtonId, state: MaximizeButtonVisualState) {
            self.states.push(state);
        }

        fn set_maximize_icon(&mut self, icon: MaximizeButtonIcon) {
            self.icons.push(icon);
        }
    }

    fn chrome(backend: &Rc<MockBackend>) -> WindowChrome<RecordingTitleBar> {
        WindowChrome::new(
            backend.clone(),
            &FakeWindow::new(),
            WindowChromeConfig::default(),
            RecordingTitleBar::default(),
        )
        .unwrap()
    }

    #[test]
    fn new_installs_and_sets_the_initial_icon() {
        let backend = Rc::new(MockBackend::default());
        backend.maximized.set(true);
        let chrome = chrome(&backend);

        assert_eq!(backend.installs.get(), 1);
        assert_eq!(chrome.title_bar().icons, [MaximizeButtonIcon::Restore]);
    }

    #[test]
    fn install_errors_are_returned() {
        let backend = Rc::new(MockBackend::default());
        backend.fail_install.set(true);
        let result = WindowChrome::new(
            backend,
            &FakeWindow::new(),
            WindowChromeConfig::default(),
            RecordingTitleBar::default(),
        );
        assert!(matches!(result, Err(ChromeError::NotSupported(_))));
    }

    #[test]
    fn unavailable_handles_are_os_errors() {
        let backend = Rc::new(MockBackend::default());
        let result = WindowChrome::new(
            backend.clone(),
            &GoneWindow,
            WindowChromeConfig::default(),
            RecordingTitleBar::default(),
        );
        assert!(matches!(result, Err(ChromeError::Os(_))));
        assert_eq!(backend.installs.get(), 0);
    }

    #[test]
    fn set_resizable_reinstalls_only_on_change() {
        let backend = Rc::new(MockBackend::default());
        let mut chrome = chrome(&backend);
        let window = FakeWindow::new();

        chrome.set_resizable(&window, true).unwrap();
        assert_eq!(backend.installs.get(), 1);

        chrome.set_resizable(&window, false).unwrap();
        assert_eq!(backend.installs.get(), 2);
        assert!(!chrome.config().resizable);
        assert!(!chrome.backend().is_resizable(window.0));
    }

    #[test]
    fn messages_reach_the_backend_with_the_window_state() {
        let backend = Rc::new(MockBackend::default());
        let mut chrome = chrome(&backend);
        let window = FakeWindow::new();

        let response = chrome.handle_native_message(&window, NativeEvent::win32(0x84, 0, 0));
        assert_eq!(response, EventResponse::Handled(0x84));
        assert_eq!(chrome.capture_tracker().hovered(), Some(&ButtonId::MAXIMIZE));
        assert_eq!(chrome.title_bar().states, [MaximizeButtonVisualState::Hover]);

        let response = chrome.handle_native_message(&GoneWindow, NativeEvent::win32(0x84, 0, 0));
        assert_eq!(response, EventResponse::Unhandled);
    }

    #[test]
    fn state_change_resets_hover_and_refreshes_the_icon() {
        let backend = Rc::new(MockBackend::default());
        let mut chrome = chrome(&backend);
        let window = FakeWindow::new();
        chrome.handle_native_message(&window, NativeEvent::win32(0x84, 0, 0));

        backend.maximized.set(true);
        chrome.window_state_changed(&window);

        assert_eq!(chrome.capture_tracker().hovered(), None);
        assert_eq!(chrome.title_bar().states.last(), Some(&MaximizeButtonVisualState::Normal));
        assert_eq!(chrome.title_bar().icons.last(), Some(&MaximizeButtonIcon::Restore));
    }

    #[test]
    fn hit_test_follows_live_state_and_config() {
        let backend = Rc::new(MockBackend::default());
        let mut chrome = chrome(&backend);
        let window = FakeWindow::new();
        let size = PhysicalSize::new(800, 600);

        assert_eq!(chrome.hit_test(&window, PhysicalPosition::new(2, 2), size), HitRegion::TopLeft);
        assert_eq!(chrome.hit_test(&window, PhysicalPosition::new(400, 15), size), HitRegion::Caption);
        assert_eq!(
            chrome.hit_test(&window, PhysicalPosition::new(770, 15), size),
            HitRegion::CustomButton(ButtonId::MAXIMIZE)
        );

        backend.maximized.set(true);
        assert_eq!(chrome.hit_test(&window, PhysicalPosition::new(2, 2), size), HitRegion::Client);
        assert_eq!(chrome.hit_test(&window, PhysicalPosition::new(2, 15), size), HitRegion::Caption);
        backend.maximized.set(false);

        chrome.set_border_width_override(Some(0));
        assert_eq!(chrome.border_metrics(&window).resize_border_x, 0);
        assert_eq!(chrome.hit_test(&window, PhysicalPosition::new(2, 2), size), HitRegion::Caption);
    }

    #[test]
    fn frame_state_falls_back_without_a_handle() {
        let backend = Rc::new(MockBackend::default());
        backend.maximized.set(true);
        let chrome = chrome(&backend);

        assert!(chrome.frame_state(&FakeWindow::new()).maximized);
        assert_eq!(chrome.frame_state(&GoneWindow), FrameState::default());
        assert_eq!(chrome.border_metrics(&GoneWindow), BorderMetrics::FALLBACK);
    }
}
