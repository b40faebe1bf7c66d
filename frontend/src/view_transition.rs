//! Circular reveal between themes on top of the View Transitions API.
//!
//! The API is optional. [`RevealStrategy::select`] picks the animated path only
//! when the platform supports it and the button geometry is known; every other
//! case switches immediately. Both paths run the update exactly once.

use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

use js_sys::{Array, Function, Object, Promise, Reflect};
use thiserror::Error;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};

use crate::config::{REVEAL_DURATION_MS, REVEAL_EASING, REVEAL_PSEUDO_ELEMENT};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

/// On-screen bounding box of the button, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl ButtonRect {
    pub fn center(&self) -> Point {
        Point {
            x: self.x + self.width / 2.0,
            y: self.y + self.height / 2.0,
        }
    }
}

impl From<&web_sys::DomRect> for ButtonRect {
    fn from(rect: &web_sys::DomRect) -> Self {
        Self {
            x: rect.x(),
            y: rect.y(),
            width: rect.width(),
            height: rect.height(),
        }
    }
}

/// Circle that starts at the button and ends covering the whole viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealGeometry {
    pub center: Point,
    pub radius: f64,
}

impl RevealGeometry {
    pub fn new(center: Point, viewport: Viewport) -> Self {
        Self {
            center,
            radius: reveal_radius(center, viewport),
        }
    }

    /// `clip-path` values for the first and last keyframe.
    pub fn clip_path_frames(&self) -> [String; 2] {
        let Point {
            x,
            y,
        } = self.center;
        [format!("circle(0px at {x}px {y}px)"), format!("circle({}px at {x}px {y}px)", self.radius)]
    }
}

/// Distance from `center` to the furthest viewport corner.
pub fn reveal_radius(center: Point, viewport: Viewport) -> f64 {
    let dx = center.x.max(viewport.width - center.x);
    let dy = center.y.max(viewport.height - center.y);
    (dx * dx + dy * dy).sqrt()
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RevealStrategy {
    Immediate,
    CircularReveal(RevealGeometry),
}

impl RevealStrategy {
    pub fn select(supported: bool, button: Option<ButtonRect>, viewport: Option<Viewport>) -> Self {
        match (supported, button, viewport) {
            (true, Some(button), Some(viewport)) => {
                RevealStrategy::CircularReveal(RevealGeometry::new(button.center(), viewport))
            },
            _ => RevealStrategy::Immediate,
        }
    }
}

#[derive(Debug, Error)]
pub enum TransitionError {
    #[error("document is not available")]
    NoDocument,
    #[error("{0} is not supported")]
    Unsupported(&'static str),
    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for TransitionError {
    fn from(value: JsValue) -> Self {
        TransitionError::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

pub type Update = Box<dyn FnOnce()>;

/// A state update that runs at most once, whoever gets to it first.
///
/// Shared between the platform callback and the fallback path so a failure
/// after feature detection still switches the theme exactly once.
#[derive(Clone)]
pub struct PendingUpdate(Rc<RefCell<Option<Update>>>);

impl PendingUpdate {
    pub fn new(update: Update) -> Self {
        Self(Rc::new(RefCell::new(Some(update))))
    }

    /// Returns `true` if this call ran the update.
    pub fn run(&self) -> bool {
        let update = self.0.borrow_mut().take();
        match update {
            Some(update) => {
                update();
                true
            },
            None => false,
        }
    }
}

/// Marks a theme change as in flight so overlapping clicks can be dropped.
#[derive(Debug, Clone, Default)]
pub struct TransitionGate(Rc<Cell<bool>>);

impl TransitionGate {
    /// Returns `false` if a transition is already running.
    pub fn try_begin(&self) -> bool {
        !self.0.replace(true)
    }

    pub fn settle(&self) {
        self.0.set(false);
    }
}

/// What the theme button needs from the host environment.
pub trait TransitionPlatform {
    fn supports_view_transition(&self) -> bool;

    fn viewport(&self) -> Option<Viewport>;

    /// Start a view transition that runs `update` and reveals the new
    /// snapshot along `geometry`. `on_settled` fires once the transition is
    /// over, whether or not the animation could be played. Implementations
    /// must guarantee `update` runs exactly once.
    fn start_view_transition(&self, update: Update, geometry: RevealGeometry, on_settled: Update);
}

/// Switch the theme through `platform`, animating when possible.
pub fn run_theme_change<P>(
    platform: &P,
    button: Option<ButtonRect>,
    update: Update,
    on_settled: Update,
) -> RevealStrategy
where
    P: TransitionPlatform + ?Sized,
{
    let strategy =
        RevealStrategy::select(platform.supports_view_transition(), button, platform.viewport());
    match strategy {
        RevealStrategy::Immediate => {
            tracing::debug!("view transition unavailable, switching theme immediately");
            update();
            on_settled();
        },
        RevealStrategy::CircularReveal(geometry) => {
            platform.start_view_transition(update, geometry, on_settled);
        },
    }
    strategy
}

/// [`TransitionPlatform`] backed by the browser window.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserPlatform;

impl TransitionPlatform for BrowserPlatform {
    fn supports_view_transition(&self) -> bool {
        web_sys::window()
            .and_then(|win| win.document())
            .and_then(|doc| Reflect::get(&doc, &JsValue::from_str("startViewTransition")).ok())
            .map(|value| value.is_function())
            .unwrap_or(false)
    }

    fn viewport(&self) -> Option<Viewport> {
        let win = web_sys::window()?;
        Some(Viewport {
            width: win.inner_width().ok()?.as_f64()?,
            height: win.inner_height().ok()?.as_f64()?,
        })
    }

    fn start_view_transition(&self, update: Update, geometry: RevealGeometry, on_settled: Update) {
        let pending = PendingUpdate::new(update);
        match begin_transition(pending.clone()) {
            Ok(transition) => {
                spawn_local(async move {
                    if let Err(err) = reveal_when_ready(&transition, &geometry).await {
                        tracing::warn!(%err, "circular reveal skipped");
                    }
                    if let Ok(finished) = promise_field(&transition, "finished") {
                        let _ = JsFuture::from(finished).await;
                    }
                    // The platform may drop the callback when the transition
                    // is skipped; make sure the theme still changes.
                    pending.run();
                    on_settled();
                });
            },
            Err(err) => {
                tracing::warn!(%err, "view transition failed to start");
                pending.run();
                on_settled();
            },
        }
    }
}

fn begin_transition(pending: PendingUpdate) -> Result<JsValue, TransitionError> {
    let document = web_sys::window()
        .and_then(|win| win.document())
        .ok_or(TransitionError::NoDocument)?;
    let start = Reflect::get(&document, &JsValue::from_str("startViewTransition"))?
        .dyn_into::<Function>()
        .map_err(|_| TransitionError::Unsupported("document.startViewTransition"))?;
    let callback = Closure::once_into_js(move || {
        pending.run();
    });
    Ok(start.call1(&document, &callback)?)
}

async fn reveal_when_ready(
    transition: &JsValue,
    geometry: &RevealGeometry,
) -> Result<(), TransitionError> {
    JsFuture::from(promise_field(transition, "ready")?).await?;
    animate_reveal(geometry)
}

fn promise_field(target: &JsValue, name: &'static str) -> Result<Promise, TransitionError> {
    Reflect::get(target, &JsValue::from_str(name))?
        .dyn_into::<Promise>()
        .map_err(|_| TransitionError::Unsupported(name))
}

fn animate_reveal(geometry: &RevealGeometry) -> Result<(), TransitionError> {
    let root = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.document_element())
        .ok_or(TransitionError::NoDocument)?;

    let [from, to] = geometry.clip_path_frames();
    let keyframes = Object::new();
    Reflect::set(
        &keyframes,
        &JsValue::from_str("clipPath"),
        &Array::of2(&JsValue::from_str(&from), &JsValue::from_str(&to)),
    )?;

    let options = Object::new();
    Reflect::set(&options, &JsValue::from_str("duration"), &JsValue::from_f64(REVEAL_DURATION_MS))?;
    Reflect::set(&options, &JsValue::from_str("easing"), &JsValue::from_str(REVEAL_EASING))?;
    Reflect::set(
        &options,
        &JsValue::from_str("pseudoElement"),
        &JsValue::from_str(REVEAL_PSEUDO_ELEMENT),
    )?;

    let animate = Reflect::get(&root, &JsValue::from_str("animate"))?
        .dyn_into::<Function>()
        .map_err(|_| TransitionError::Unsupported("Element.animate"))?;
    animate.call2(&root, &keyframes, &options)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingPlatform {
        supported: bool,
        viewport: Option<Viewport>,
        started: RefCell<Vec<RevealGeometry>>,
    }

    impl TransitionPlatform for RecordingPlatform {
        fn supports_view_transition(&self) -> bool {
            self.supported
        }

        fn viewport(&self) -> Option<Viewport> {
            self.viewport
        }

        fn start_view_transition(&self, update: Update, geometry: RevealGeometry, on_settled: Update) {
            self.started.borrow_mut().push(geometry);
            update();
            on_settled();
        }
    }

    fn counter() -> (Rc<Cell<u32>>, Update) {
        let count = Rc::new(Cell::new(0));
        let update = {
            let count = count.clone();
            Box::new(move || count.set(count.get() + 1)) as Update
        };
        (count, update)
    }

    fn button_centered_at(x: f64, y: f64) -> ButtonRect {
        ButtonRect {
            x: x - 20.0,
            y: y - 20.0,
            width: 40.0,
            height: 40.0,
        }
    }

    const VIEWPORT: Viewport = Viewport {
        width: 800.0,
        height: 600.0,
    };

    #[test]
    fn radius_reaches_furthest_corner() {
        let radius = reveal_radius(Point { x: 100.0, y: 50.0 }, VIEWPORT);
        assert!((radius - (700.0_f64.powi(2) + 550.0_f64.powi(2)).sqrt()).abs() < 1e-9);
        assert!((radius - 890.22).abs() < 0.01);
    }

    #[test]
    fn radius_is_symmetric_around_viewport_center() {
        let left = reveal_radius(Point { x: 100.0, y: 300.0 }, VIEWPORT);
        let right = reveal_radius(Point { x: 700.0, y: 300.0 }, VIEWPORT);
        assert!((left - right).abs() < 1e-9);
        let center = reveal_radius(Point { x: 400.0, y: 300.0 }, VIEWPORT);
        assert!((center - 500.0).abs() < 1e-9);
    }

    #[test]
    fn clip_path_frames_grow_from_zero() {
        let geometry = RevealGeometry {
            center: Point { x: 12.5, y: 40.0 },
            radius: 300.0,
        };
        let [from, to] = geometry.clip_path_frames();
        assert_eq!(from, "circle(0px at 12.5px 40px)");
        assert_eq!(to, "circle(300px at 12.5px 40px)");
    }

    #[test]
    fn unsupported_platform_switches_once_without_animation() {
        let platform = RecordingPlatform {
            supported: false,
            viewport: Some(VIEWPORT),
            ..Default::default()
        };
        let (updates, update) = counter();
        let (settled, on_settled) = counter();

        let strategy =
            run_theme_change(&platform, Some(button_centered_at(100.0, 50.0)), update, on_settled);

        assert_eq!(strategy, RevealStrategy::Immediate);
        assert_eq!(updates.get(), 1);
        assert_eq!(settled.get(), 1);
        assert!(platform.started.borrow().is_empty());
    }

    #[test]
    fn missing_button_rect_switches_immediately() {
        let platform = RecordingPlatform {
            supported: true,
            viewport: Some(VIEWPORT),
            ..Default::default()
        };
        let (updates, update) = counter();
        let (_, on_settled) = counter();

        let strategy = run_theme_change(&platform, None, update, on_settled);

        assert_eq!(strategy, RevealStrategy::Immediate);
        assert_eq!(updates.get(), 1);
        assert!(platform.started.borrow().is_empty());
    }

    #[test]
    fn supported_platform_reveals_from_button_center() {
        let platform = RecordingPlatform {
            supported: true,
            viewport: Some(VIEWPORT),
            ..Default::default()
        };
        let (updates, update) = counter();
        let (settled, on_settled) = counter();

        let strategy =
            run_theme_change(&platform, Some(button_centered_at(100.0, 50.0)), update, on_settled);

        let started = platform.started.borrow();
        assert_eq!(started.len(), 1);
        assert_eq!(strategy, RevealStrategy::CircularReveal(started[0]));
        assert_eq!(started[0].center, Point { x: 100.0, y: 50.0 });
        assert!((started[0].radius - 890.22).abs() < 0.01);
        assert_eq!(updates.get(), 1);
        assert_eq!(settled.get(), 1);
    }

    #[test]
    fn pending_update_runs_once() {
        let (count, update) = counter();
        let pending = PendingUpdate::new(update);
        let other = pending.clone();

        assert!(pending.run());
        assert!(!other.run());
        assert!(!pending.run());
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn gate_rejects_overlapping_changes() {
        let gate = TransitionGate::default();
        assert!(gate.try_begin());
        assert!(!gate.clone().try_begin());
        assert!(!gate.try_begin());
        gate.settle();
        assert!(gate.try_begin());
    }
}
