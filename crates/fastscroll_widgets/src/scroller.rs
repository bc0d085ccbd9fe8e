//! The fast-scroll overlay
//!
//! [`FastScroller`] ties the pieces together for one host widget instance:
//!
//! - on every redraw it reads fresh metrics, asks [`VisibilityPolicy`]
//!   whether to render, places the thumb through [`GeometryMapper`] and
//!   paints track and thumb at the [`FadeClock`] opacity
//! - raw pointer events run through the [`DragController`] and become host
//!   position commands
//! - host scroll notifications and deferred ticks drive the fade
//!
//! The scroller never owns its host. Every entry point that needs the host
//! borrows it for the duration of the call, so there is nothing to release
//! on teardown beyond the pending tick.
//!
//! # Example
//!
//! ```ignore
//! let mut scroller = FastScroller::new(FastScrollConfig::item_list())?;
//!
//! // host callbacks
//! scroller.on_host_scrolled(&mut list, Instant::now());
//! scroller.draw(&mut list, &mut canvas, Instant::now());
//! if scroller.on_pointer_event(&mut list, event, Instant::now()).is_consumed() {
//!     return true;
//! }
//! ```

use std::time::{Duration, Instant};

use fastscroll_animation::{Easing, FadeClock, FadePhase, FadeTimer, TickId, TickScheduler};
use fastscroll_core::{Color, DrawSurface, PointerEvent, PointerKind, Rect};
use smallvec::SmallVec;
use tracing::{debug, trace, warn};

use crate::config::{validate_dimension, validate_threshold, FastScrollConfig};
use crate::drag::DragController;
use crate::error::Result;
use crate::host::{HostProfile, HostScrollState, ScrollHost, ScrollObserver};
use crate::mapper::{GeometryMapper, ThumbGeometry};
use crate::metrics::{InteractionState, ScrollState};
use crate::visibility::{HiddenReason, Visibility, VisibilityPolicy};

/// Whether a pointer event was handled by the overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// The overlay claimed the event; the host must not handle it
    Consumed,
    /// Pass the event on to the host's own gesture handling
    Ignored,
}

impl EventResult {
    pub fn is_consumed(&self) -> bool {
        matches!(self, EventResult::Consumed)
    }
}

/// Part of the overlay a paint operation belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OverlayPart {
    Track,
    Thumb,
}

/// One rectangle fill issued by [`FastScroller::draw`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaintOp {
    pub part: OverlayPart,
    pub rect: Rect,
    pub color: Color,
}

/// What a visible frame painted, in paint order
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayPaint {
    pub opacity: f32,
    pub geometry: ThumbGeometry,
    pub ops: SmallVec<[PaintOp; 2]>,
}

impl OverlayPaint {
    pub fn op(&self, part: OverlayPart) -> Option<&PaintOp> {
        self.ops.iter().find(|op| op.part == part)
    }
}

/// Auto-fading thumb/track overlay for one list host
pub struct FastScroller {
    config: FastScrollConfig,
    clock: FadeClock,
    timer: FadeTimer,
    ticks: TickScheduler,
    interaction: InteractionState,
    drag: DragController,
    /// Touch target of the last visible frame; `None` while hidden
    hit_rect: Option<Rect>,
    /// Last state pushed to the host's native scrollbar
    native_scrollbar_enabled: Option<bool>,
    last_metrics: Option<ScrollState>,
    observer: Option<Box<dyn ScrollObserver>>,
}

impl std::fmt::Debug for FastScroller {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FastScroller")
            .field("config", &self.config)
            .field("interaction", &self.interaction)
            .field("drag", &self.drag)
            .field("hit_rect", &self.hit_rect)
            .field("pending_tick", &self.ticks.pending())
            .field("has_observer", &self.observer.is_some())
            .finish_non_exhaustive()
    }
}

impl FastScroller {
    /// Create a scroller, rejecting configurations that would corrupt
    /// geometry
    pub fn new(config: FastScrollConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            clock: config.fade_clock(),
            config,
            timer: FadeTimer::new(),
            ticks: TickScheduler::new(),
            interaction: InteractionState::Idle,
            drag: DragController::new(),
            hit_rect: None,
            native_scrollbar_enabled: None,
            last_metrics: None,
            observer: None,
        })
    }

    // =========================================================================
    // Configuration
    // =========================================================================

    pub fn config(&self) -> &FastScrollConfig {
        &self.config
    }

    /// Replace the whole configuration. On error the current one is kept.
    pub fn apply_config(&mut self, config: FastScrollConfig) -> Result<()> {
        rejected(config.validate())?;
        let was_enabled = self.config.enabled;
        self.clock = config.fade_clock();
        self.config = config;
        if was_enabled && !self.config.enabled {
            self.end_drag_silently();
        }
        Ok(())
    }

    pub fn set_thumb_width(&mut self, width: f32) -> Result<()> {
        rejected(validate_dimension("thumb_width", width))?;
        self.config.thumb_width = width;
        Ok(())
    }

    pub fn set_thumb_height(&mut self, height: f32) -> Result<()> {
        rejected(validate_dimension("thumb_height", height))?;
        self.config.thumb_height = height;
        Ok(())
    }

    /// Set the idle and dragging thumb colors, as `0xAARRGGBB` words
    pub fn set_thumb_colors(&mut self, idle: u32, active: u32) {
        self.config.thumb_color_idle = idle;
        self.config.thumb_color_active = active;
    }

    pub fn set_track_color(&mut self, color: u32) {
        self.config.track_color = color;
    }

    pub fn set_track_transparent(&mut self, transparent: bool) {
        self.config.track_transparent = transparent;
    }

    /// Disabling ends any drag in progress without issuing further commands.
    /// The next [`draw`](Self::draw) hands a switched-off native scrollbar
    /// back to the host.
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.config.enabled && !enabled {
            self.end_drag_silently();
        }
        self.config.enabled = enabled;
    }

    pub fn set_force_visible(&mut self, force: bool) {
        self.config.force_visible = force;
    }

    pub fn set_hold_duration(&mut self, hold: Duration) {
        self.config.hold_duration_ms = duration_millis(hold);
        self.clock = self.config.fade_clock();
    }

    pub fn set_fade_duration(&mut self, fade: Duration) {
        self.config.fade_duration_ms = duration_millis(fade);
        self.clock = self.config.fade_clock();
    }

    pub fn set_fade_easing(&mut self, easing: Easing) {
        self.config.fade_easing = easing;
        self.clock = self.config.fade_clock();
    }

    pub fn set_visibility_length_threshold(&mut self, screens: f32) -> Result<()> {
        rejected(validate_threshold(screens))?;
        self.config.visibility_length_threshold = screens;
        Ok(())
    }

    /// Receive the host's scroll notifications through the scroller
    pub fn set_observer(&mut self, observer: impl ScrollObserver + 'static) {
        self.observer = Some(Box::new(observer));
    }

    pub fn clear_observer(&mut self) {
        self.observer = None;
    }

    // =========================================================================
    // State
    // =========================================================================

    pub fn interaction(&self) -> InteractionState {
        self.interaction
    }

    pub fn is_dragging(&self) -> bool {
        self.interaction.is_dragging()
    }

    /// True while the last frame painted the overlay
    pub fn is_visible(&self) -> bool {
        self.hit_rect.is_some()
    }

    pub fn hit_rect(&self) -> Option<Rect> {
        self.hit_rect
    }

    pub fn pending_tick(&self) -> Option<TickId> {
        self.ticks.pending()
    }

    pub fn last_metrics(&self) -> Option<ScrollState> {
        self.last_metrics
    }

    pub fn fade_timer(&self) -> &FadeTimer {
        &self.timer
    }

    /// Current overlay opacity. Active interaction and forced visibility
    /// hold it at 1.0.
    pub fn opacity(&self, now: Instant) -> f32 {
        if self.config.force_visible || self.interaction.is_active() {
            1.0
        } else {
            self.timer.opacity(&self.clock, now)
        }
    }

    fn mapper(&self, profile: HostProfile) -> GeometryMapper {
        GeometryMapper::new(self.config.thumb_width, self.config.thumb_height, profile)
    }

    // =========================================================================
    // Drawing
    // =========================================================================

    /// Paint the overlay for the current frame.
    ///
    /// Returns what was painted, or `None` when the overlay is hidden. While
    /// the overlay is partly faded the host is asked for another frame.
    pub fn draw<H, S>(&mut self, host: &mut H, surface: &mut S, now: Instant) -> Option<OverlayPaint>
    where
        H: ScrollHost + ?Sized,
        S: DrawSurface + ?Sized,
    {
        if !self.config.enabled {
            if host.profile().manages_native_scrollbar {
                self.sync_native_scrollbar(host, Visibility::Hidden(HiddenReason::Disabled));
            }
            self.hide(HiddenReason::Disabled);
            return None;
        }

        let view = host.view_size();
        let state = host.metrics();
        let profile = host.profile();
        self.last_metrics = Some(state);

        let opacity = self.opacity(now);
        let policy = VisibilityPolicy::new(self.config.visibility_length_threshold, profile.length_ratio);
        let visibility = policy.evaluate(
            &state,
            &self.interaction,
            view,
            self.config.thumb_height,
            opacity,
        );
        if profile.manages_native_scrollbar {
            self.sync_native_scrollbar(host, visibility);
        }
        if let Visibility::Hidden(reason) = visibility {
            self.hide(reason);
            return None;
        }

        let first_visible = host.first_visible_index();
        let Some(geometry) = self.mapper(profile).thumb(&state, first_visible, view, opacity) else {
            self.hide(HiddenReason::NoTrack);
            return None;
        };

        let mut ops: SmallVec<[PaintOp; 2]> = SmallVec::new();
        if !self.config.track_transparent {
            ops.push(PaintOp {
                part: OverlayPart::Track,
                rect: geometry.track_rect(),
                color: self.config.track_color().scale_alpha(opacity),
            });
        }
        ops.push(PaintOp {
            part: OverlayPart::Thumb,
            rect: geometry.thumb_rect(),
            color: self
                .config
                .thumb_color(self.interaction.is_dragging())
                .scale_alpha(opacity),
        });
        for op in &ops {
            surface.fill_rect(op.rect, op.color);
        }

        if self.hit_rect.is_none() {
            debug!(opacity, "fast-scroll overlay shown");
        }
        self.hit_rect = Some(geometry.hit_rect());

        if opacity > 0.0 && opacity < 1.0 {
            host.request_redraw_next_frame();
        }
        trace!(opacity, first_visible, "fast-scroll frame");

        Some(OverlayPaint {
            opacity,
            geometry,
            ops,
        })
    }

    fn hide(&mut self, reason: HiddenReason) {
        if self.hit_rect.take().is_some() {
            debug!(?reason, "fast-scroll overlay hidden");
        }
    }

    /// Hand the host's own scrollbar back when the list is too short or the
    /// overlay is disabled, and take it away while the overlay shows. Faded
    /// frames leave it alone.
    fn sync_native_scrollbar<H: ScrollHost + ?Sized>(&mut self, host: &mut H, visibility: Visibility) {
        let wanted = match visibility {
            Visibility::Visible => false,
            Visibility::Hidden(HiddenReason::Disabled) if self.native_scrollbar_enabled == Some(false) => true,
            Visibility::Hidden(reason) if reason.is_content_too_small() => true,
            Visibility::Hidden(_) => return,
        };
        if self.native_scrollbar_enabled != Some(wanted) {
            debug!(enabled = wanted, "native scrollbar toggled");
            self.native_scrollbar_enabled = Some(wanted);
            host.set_native_scrollbar_enabled(wanted);
        }
    }

    // =========================================================================
    // Input
    // =========================================================================

    /// Handle a raw pointer event in view-local coordinates
    pub fn on_pointer_event<H>(&mut self, host: &mut H, event: PointerEvent, now: Instant) -> EventResult
    where
        H: ScrollHost + ?Sized,
    {
        if !self.config.enabled {
            return EventResult::Ignored;
        }
        trace!(event_type = event.kind.event_type(), x = event.x(), y = event.y(), "pointer event");
        match event.kind {
            PointerKind::Down => self.on_pointer_down(host, event, now),
            PointerKind::Move => self.on_pointer_move(host, event),
            PointerKind::Up | PointerKind::Cancel => {
                self.on_pointer_release(host, event.kind == PointerKind::Cancel, now)
            }
        }
    }

    fn on_pointer_down<H: ScrollHost + ?Sized>(
        &mut self,
        host: &mut H,
        event: PointerEvent,
        now: Instant,
    ) -> EventResult {
        if self.drag.is_dragging() {
            // A repeated down inside a drag re-arms the next move
            self.drag.forget_last_command();
            host.request_redraw();
            return EventResult::Consumed;
        }
        if self.opacity(now) <= 0.0 {
            self.hit_rect = None;
            return EventResult::Ignored;
        }
        let Some(hit_rect) = self.hit_rect else {
            return EventResult::Ignored;
        };

        let view = host.view_size();
        let state = host.metrics();
        let thumb_top = self
            .mapper(host.profile())
            .thumb_top(&state, host.first_visible_index(), view.height);
        let Some(drag_offset_y) = self.drag.press(event.position, Some(hit_rect), thumb_top, view) else {
            return EventResult::Ignored;
        };

        debug!(drag_offset_y, y = event.y(), "thumb drag started");
        self.interaction = InteractionState::Dragging { drag_offset_y };
        self.last_metrics = Some(state);
        self.cancel_tick(host);
        host.intercept_gesture();
        host.request_redraw();
        EventResult::Consumed
    }

    fn on_pointer_move<H: ScrollHost + ?Sized>(&mut self, host: &mut H, event: PointerEvent) -> EventResult {
        let Some(drag_offset_y) = self.interaction.drag_offset_y() else {
            return EventResult::Ignored;
        };
        let state = host.metrics();
        let view_height = host.view_size().height;
        let mapper = self.mapper(host.profile());
        self.last_metrics = Some(state);
        if let Some(command) = self.drag.drag_to(event.y(), drag_offset_y, &mapper, &state, view_height) {
            trace!(?command, "drag command");
            host.command_scroll(command);
        }
        host.request_redraw();
        EventResult::Consumed
    }

    fn on_pointer_release<H: ScrollHost + ?Sized>(
        &mut self,
        host: &mut H,
        cancelled: bool,
        now: Instant,
    ) -> EventResult {
        if !self.drag.release(cancelled) {
            return EventResult::Ignored;
        }
        debug!(cancelled, "thumb drag ended");
        self.interaction = InteractionState::Idle;
        self.reset_fade_timer(host, now);
        if let Some(observer) = self.observer.as_mut() {
            observer.on_scroll_state_changed(HostScrollState::Idle);
        }
        host.request_redraw();
        EventResult::Consumed
    }

    fn end_drag_silently(&mut self) {
        if self.drag.release(true) {
            debug!("thumb drag abandoned");
        }
        if self.interaction.is_dragging() {
            self.interaction = InteractionState::Idle;
        }
    }

    // =========================================================================
    // Host notifications
    // =========================================================================

    /// The host's own gesture handling started or stopped scrolling
    pub fn on_host_scroll_state_changed<H>(&mut self, host: &mut H, state: HostScrollState, now: Instant)
    where
        H: ScrollHost + ?Sized,
    {
        self.last_metrics = Some(host.metrics());
        if let Some(observer) = self.observer.as_mut() {
            observer.on_scroll_state_changed(state);
        }
        // The drag is authoritative over host-originated state
        if self.interaction.is_dragging() {
            return;
        }
        match state {
            HostScrollState::Active => {
                if self.interaction != InteractionState::Scrolling {
                    debug!("host scrolling");
                }
                self.interaction = InteractionState::Scrolling;
                self.cancel_tick(host);
            }
            HostScrollState::Idle => {
                if self.interaction == InteractionState::Scrolling {
                    debug!("host scroll settled");
                }
                self.interaction = InteractionState::Idle;
                self.reset_fade_timer(host, now);
            }
        }
        host.request_redraw();
    }

    /// The host's scroll position changed
    pub fn on_host_scrolled<H: ScrollHost + ?Sized>(&mut self, host: &mut H, now: Instant) {
        let state = host.metrics();
        self.last_metrics = Some(state);
        if let Some(observer) = self.observer.as_mut() {
            observer.on_scroll(
                host.first_visible_index(),
                state.visible_item_count,
                state.item_count,
            );
        }
        if self.interaction.is_dragging() {
            return;
        }
        if self.interaction == InteractionState::Scrolling {
            // Scrolling holds the overlay opaque; the tick starts when it settles
            self.timer.reset(now);
        } else {
            self.reset_fade_timer(host, now);
        }
        host.request_redraw();
    }

    /// The host laid out again; cached geometry and metrics are stale
    pub fn on_layout(&mut self) {
        self.hit_rect = None;
        self.last_metrics = None;
    }

    // =========================================================================
    // Fade scheduling
    // =========================================================================

    /// Mark `now` as the last interaction and restart the fade countdown,
    /// superseding any pending tick
    pub fn reset_fade_timer<H: ScrollHost + ?Sized>(&mut self, host: &mut H, now: Instant) {
        self.timer.reset(now);
        self.schedule_tick(host, now, self.clock.hold());
    }

    fn schedule_tick<H: ScrollHost + ?Sized>(&mut self, host: &mut H, now: Instant, delay: Duration) {
        if let Some(previous) = self.ticks.pending() {
            host.cancel_tick(previous);
        }
        let id = self.ticks.schedule(now + delay);
        debug!(?id, delay_ms = delay.as_millis() as u64, "fade tick scheduled");
        host.post_tick(id, delay);
    }

    fn cancel_tick<H: ScrollHost + ?Sized>(&mut self, host: &mut H) {
        if let Some(id) = self.ticks.cancel() {
            debug!(?id, "fade tick cancelled");
            host.cancel_tick(id);
        }
    }

    /// A tick posted through [`HostView::post_tick`](crate::HostView::post_tick)
    /// came due. Superseded or cancelled ticks are ignored.
    pub fn on_tick<H: ScrollHost + ?Sized>(&mut self, host: &mut H, tick: TickId, now: Instant) {
        if !self.ticks.fire(tick) {
            return;
        }
        match self.interaction {
            InteractionState::Scrolling => {
                self.reset_fade_timer(host, now);
                return;
            }
            InteractionState::Dragging { .. } => return,
            InteractionState::Idle => {}
        }
        let Some(elapsed) = self.timer.elapsed(now) else {
            return;
        };
        if let FadePhase::Fading { progress } = self.clock.phase(elapsed) {
            trace!(progress, "fade tick");
            host.request_redraw_next_frame();
        }
        match self.clock.next_wakeup(elapsed) {
            Some(remaining) => self.schedule_tick(host, now, remaining),
            // Last repaint clears the overlay
            None => host.request_redraw(),
        }
    }

    /// The host is being torn down: drop the pending tick and any drag
    pub fn detach<H: ScrollHost + ?Sized>(&mut self, host: &mut H) {
        debug!("fast scroller detached");
        self.cancel_tick(host);
        self.end_drag_silently();
        self.interaction = InteractionState::Idle;
        self.hit_rect = None;
        self.last_metrics = None;
    }
}

fn rejected(result: Result<()>) -> Result<()> {
    if let Err(err) = &result {
        warn!("rejected fast-scroll setting: {err}");
    }
    result
}

fn duration_millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}
