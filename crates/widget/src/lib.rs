#![deny(unsafe_code)]
//! Host-facing lifecycle shell for the driftnet particle field.
//!
//! A [`Widget`] is either `Uninitialized` or `Running`. Mounting builds the
//! field, the raster surface, and a [`FrameHandle`] — an explicit cancelable
//! token that replaces a self-scheduling animation loop. Unmounting cancels
//! the handle and tears everything down; a frame-count probe stops
//! incrementing the instant unmount returns.
//!
//! Host events (`PointerMove`, `Resize`) are queued, not applied: the next
//! [`Widget::frame`] call drains the queue before ticking, making the frame
//! the sole serialization point. Handlers never touch particles directly.

use driftnet_core::error::FieldError;
use driftnet_core::simulator::Simulator;
use driftnet_render::raster::Raster;
use driftnet_render::scene::{self, EdgeStyle};
use driftnet_sim::Field;
use serde_json::Value;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use thiserror::Error;

/// Errors produced by widget lifecycle operations.
#[derive(Debug, Error)]
pub enum WidgetError {
    /// `frame()` was called on an unmounted widget.
    #[error("widget is not mounted")]
    NotMounted,

    /// An underlying field or raster operation failed.
    #[error(transparent)]
    Field(#[from] FieldError),
}

/// Lifecycle state of a widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetState {
    /// No particles, no surface, no live loop token.
    Uninitialized,
    /// Field and surface exist and frames may be driven.
    Running,
}

/// A host notification, queued until the next frame applies it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// The pointer moved to viewport coordinates (x, y).
    PointerMove { x: f64, y: f64 },
    /// The viewport was resized. Applying this reseeds the field and
    /// replaces the raster surface.
    Resize { width: usize, height: usize },
}

/// Cancelable token for the frame loop.
///
/// Cloning shares the token; cancelling any clone stops every driver that
/// polls it. [`Widget::unmount`] cancels the widget's own token, so no
/// orphaned loop can keep driving a torn-down widget.
#[derive(Debug, Clone, Default)]
pub struct FrameHandle {
    cancelled: Arc<AtomicBool>,
}

impl FrameHandle {
    /// Requests loop termination. Idempotent.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    /// True once any clone of this handle has been cancelled.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }
}

/// Everything that exists only while the widget is mounted.
struct Mounted {
    field: Field,
    raster: Raster,
    style: EdgeStyle,
    handle: FrameHandle,
}

/// The embeddable particle-field widget.
pub struct Widget {
    mounted: Option<Mounted>,
    pending: Vec<Event>,
    frames: u64,
}

impl Widget {
    /// Mounts the widget: seeds the field, allocates the drawing surface,
    /// and issues a fresh loop token.
    ///
    /// Returns `FieldError::InvalidDimensions` (wrapped) for a zero-sized
    /// viewport — the one fatal condition this cosmetic layer has.
    pub fn mount(
        width: usize,
        height: usize,
        seed: u64,
        params: &Value,
    ) -> Result<Self, WidgetError> {
        let field = Field::from_json(width, height, seed, params)?;
        let raster = Raster::new(width, height)?;
        let style = EdgeStyle::from_json(params);
        log::debug!(
            "mounted {width}x{height} widget with {} particles (seed {seed})",
            field.particles().len()
        );
        Ok(Self {
            mounted: Some(Mounted {
                field,
                raster,
                style,
                handle: FrameHandle::default(),
            }),
            pending: Vec::new(),
            frames: 0,
        })
    }

    /// Current lifecycle state.
    pub fn state(&self) -> WidgetState {
        if self.mounted.is_some() {
            WidgetState::Running
        } else {
            WidgetState::Uninitialized
        }
    }

    /// Number of frames rendered since mount. Survives unmount, so a probe
    /// can verify the counter stops advancing.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// A clone of the loop token, for external drivers that want to stop
    /// the loop without unmounting.
    pub fn handle(&self) -> Option<FrameHandle> {
        self.mounted.as_ref().map(|m| m.handle.clone())
    }

    /// The field, while mounted.
    pub fn field(&self) -> Option<&Field> {
        self.mounted.as_ref().map(|m| &m.field)
    }

    /// The last rendered surface, while mounted.
    pub fn raster(&self) -> Option<&Raster> {
        self.mounted.as_ref().map(|m| &m.raster)
    }

    /// Queues a host event for the next frame.
    ///
    /// Events arriving on an unmounted widget are dropped — the listeners
    /// are conceptually detached.
    pub fn handle_event(&mut self, event: Event) {
        if self.mounted.is_some() {
            self.pending.push(event);
        }
    }

    /// Renders one frame: drains queued events, ticks the field, redraws
    /// the surface, and bumps the frame counter.
    pub fn frame(&mut self) -> Result<(), WidgetError> {
        let mounted = self.mounted.as_mut().ok_or(WidgetError::NotMounted)?;

        for event in self.pending.drain(..) {
            match event {
                Event::PointerMove { x, y } => mounted.field.on_pointer_move(x, y),
                Event::Resize { width, height } => {
                    mounted.field.on_resize(width, height)?;
                    mounted.raster = Raster::new(width, height)?;
                }
            }
        }

        mounted.field.step()?;
        scene::render(mounted.field.particles(), &mounted.style, &mut mounted.raster);
        self.frames += 1;
        Ok(())
    }

    /// Unmounts the widget: cancels the loop token, clears queued events,
    /// and drops the field and surface. Idempotent.
    pub fn unmount(&mut self) {
        if let Some(mounted) = self.mounted.take() {
            mounted.handle.cancel();
            log::debug!("unmounted widget after {} frames", self.frames);
        }
        self.pending.clear();
    }
}

/// Drives up to `max_frames` frames, stopping early if the widget's loop
/// token is cancelled. Returns the number of frames actually rendered.
pub fn run_frames(widget: &mut Widget, max_frames: u64) -> Result<u64, WidgetError> {
    let handle = widget.handle().ok_or(WidgetError::NotMounted)?;
    let mut rendered = 0;
    while rendered < max_frames && !handle.is_cancelled() {
        widget.frame()?;
        rendered += 1;
    }
    Ok(rendered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn widget() -> Widget {
        Widget::mount(800, 600, 42, &json!({})).unwrap()
    }

    // ---- Lifecycle ----

    #[test]
    fn mount_enters_running_state() {
        let w = widget();
        assert_eq!(w.state(), WidgetState::Running);
        assert_eq!(w.frames(), 0);
        assert_eq!(w.field().unwrap().particles().len(), 80);
        assert_eq!(w.raster().unwrap().width(), 800);
    }

    #[test]
    fn mount_with_zero_dimensions_fails() {
        assert!(Widget::mount(0, 600, 42, &json!({})).is_err());
        assert!(Widget::mount(800, 0, 42, &json!({})).is_err());
    }

    #[test]
    fn frame_advances_counter_and_renders() {
        let mut w = widget();
        w.frame().unwrap();
        w.frame().unwrap();
        assert_eq!(w.frames(), 2);
    }

    #[test]
    fn unmount_returns_to_uninitialized() {
        let mut w = widget();
        w.frame().unwrap();
        w.unmount();
        assert_eq!(w.state(), WidgetState::Uninitialized);
        assert!(w.field().is_none());
        assert!(w.raster().is_none());
    }

    #[test]
    fn frame_after_unmount_is_rejected_and_counter_freezes() {
        let mut w = widget();
        w.frame().unwrap();
        w.unmount();
        let frozen = w.frames();
        assert!(matches!(w.frame(), Err(WidgetError::NotMounted)));
        assert!(matches!(w.frame(), Err(WidgetError::NotMounted)));
        assert_eq!(w.frames(), frozen);
    }

    #[test]
    fn unmount_is_idempotent() {
        let mut w = widget();
        w.unmount();
        w.unmount();
        assert_eq!(w.state(), WidgetState::Uninitialized);
    }

    #[test]
    fn unmount_cancels_the_issued_handle() {
        let mut w = widget();
        let handle = w.handle().unwrap();
        assert!(!handle.is_cancelled());
        w.unmount();
        assert!(handle.is_cancelled());
    }

    // ---- Events ----

    #[test]
    fn pointer_event_is_deferred_until_next_frame() {
        let mut w = widget();
        w.handle_event(Event::PointerMove { x: 400.0, y: 300.0 });
        // Queued, not applied: the field still has the default pointer.
        assert_eq!(w.field().unwrap().pointer().position, glam::DVec2::ZERO);
        w.frame().unwrap();
        let p = w.field().unwrap().pointer().position;
        assert!((p.x - 400.0).abs() < f64::EPSILON);
        assert!((p.y - 300.0).abs() < f64::EPSILON);
    }

    #[test]
    fn resize_event_reseeds_field_and_replaces_surface() {
        let mut w = widget();
        w.handle_event(Event::Resize {
            width: 400,
            height: 300,
        });
        w.frame().unwrap();
        assert_eq!(w.field().unwrap().particles().len(), 40);
        assert_eq!(w.raster().unwrap().width(), 400);
        assert_eq!(w.raster().unwrap().height(), 300);
    }

    #[test]
    fn resize_to_zero_surfaces_the_error() {
        let mut w = widget();
        w.handle_event(Event::Resize {
            width: 0,
            height: 300,
        });
        assert!(w.frame().is_err());
    }

    #[test]
    fn events_on_unmounted_widget_are_dropped() {
        let mut w = widget();
        w.unmount();
        w.handle_event(Event::PointerMove { x: 1.0, y: 2.0 });
        assert!(w.pending.is_empty());
    }

    #[test]
    fn events_apply_in_arrival_order() {
        let mut w = widget();
        w.handle_event(Event::PointerMove { x: 10.0, y: 10.0 });
        w.handle_event(Event::PointerMove { x: 99.0, y: 88.0 });
        w.frame().unwrap();
        let p = w.field().unwrap().pointer().position;
        assert!((p.x - 99.0).abs() < f64::EPSILON);
        assert!((p.y - 88.0).abs() < f64::EPSILON);
    }

    // ---- Driver ----

    #[test]
    fn run_frames_renders_requested_count() {
        let mut w = widget();
        let rendered = run_frames(&mut w, 25).unwrap();
        assert_eq!(rendered, 25);
        assert_eq!(w.frames(), 25);
    }

    #[test]
    fn run_frames_stops_immediately_on_cancelled_handle() {
        let mut w = widget();
        w.handle().unwrap().cancel();
        let rendered = run_frames(&mut w, 25).unwrap();
        assert_eq!(rendered, 0);
        assert_eq!(w.frames(), 0);
    }

    #[test]
    fn run_frames_on_unmounted_widget_errors() {
        let mut w = widget();
        w.unmount();
        assert!(matches!(run_frames(&mut w, 5), Err(WidgetError::NotMounted)));
    }

    #[test]
    fn mounted_frames_render_nonempty_raster() {
        let mut w = widget();
        w.frame().unwrap();
        let raster = w.raster().unwrap();
        let buf = raster.to_rgba8();
        assert!(
            buf.chunks(4).any(|px| px[3] > 0),
            "a frame of an 80-particle field should light at least one pixel"
        );
    }

    #[test]
    fn custom_params_flow_into_field() {
        let params = json!({
            "max_particles": 10,
            "connection_threshold": 50.0,
        });
        let w = Widget::mount(800, 600, 42, &params).unwrap();
        assert_eq!(w.field().unwrap().particles().len(), 10);
    }
}
