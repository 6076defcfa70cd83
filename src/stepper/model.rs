//! The stepper component: progress state, transitions and redraw.

use super::render;
use super::state::ProgressState;
use crate::animation::{AnimationScheduler, Easing, FrameMsg};
use crate::error::StepperError;
use crate::geometry::{layout, NodeGeometry, Size};
use crate::layers::{Classification, LayerModel, TrackKind};
use crate::theme::ThemeConfig;
use bubbletea_rs::{Cmd, Model as BubbleTeaModel, Msg};
use tracing::{debug, trace, warn};

const DEFAULT_WIDTH: usize = 40;
const DEFAULT_HEIGHT: f64 = 3.0;

/// What `move_to` does when asked for the step that is already active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SameIndexPolicy {
    /// Record the completed-index snapshot and change nothing else.
    #[default]
    Skip,
    /// Run the full transition anyway, rescheduling both track animations
    /// and repainting every node.
    Redraw,
}

/// Configuration options for a stepper, applied in order by [`new`].
///
/// # Examples
///
/// ```rust
/// use bubbletea_stepper::geometry::Size;
/// use bubbletea_stepper::stepper::{new, with_bounds, with_width, SameIndexPolicy,
///     with_same_index_policy};
///
/// let stepper = new(&[
///     with_bounds(Size::new(400.0, 100.0)),
///     with_width(60),
///     with_same_index_policy(SameIndexPolicy::Redraw),
/// ]);
/// assert_eq!(stepper.width, 60);
/// ```
#[derive(Debug, Clone)]
pub enum StepperOption {
    /// Uses the given theme. Invalid themes are ignored.
    WithTheme(ThemeConfig),
    /// Sets the view's allocated rectangle.
    WithBounds(Size),
    /// Sets how many terminal columns `view` renders into.
    WithWidth(usize),
    /// Chooses the same-index behavior of `move_to`.
    WithSameIndexPolicy(SameIndexPolicy),
    /// Sets the device pixel scale given to label graphics.
    WithContentsScale(f64),
    /// Sets the timing curve of track animations.
    WithEasing(Easing),
}

impl StepperOption {
    fn apply(&self, m: &mut Model) {
        match self {
            StepperOption::WithTheme(theme) => match theme.validate() {
                Ok(()) => m.theme = theme.clone(),
                Err(err) => warn!(%err, "ignoring invalid theme option"),
            },
            StepperOption::WithBounds(bounds) => {
                m.bounds = *bounds;
            }
            StepperOption::WithWidth(width) => {
                m.width = *width;
            }
            StepperOption::WithSameIndexPolicy(policy) => {
                m.same_index_policy = *policy;
            }
            StepperOption::WithContentsScale(scale) => {
                m.contents_scale = *scale;
            }
            StepperOption::WithEasing(easing) => {
                m.easing = *easing;
            }
        }
    }
}

/// Uses the given theme.
pub fn with_theme(theme: ThemeConfig) -> StepperOption {
    StepperOption::WithTheme(theme)
}

/// Sets the view's allocated rectangle.
pub fn with_bounds(bounds: Size) -> StepperOption {
    StepperOption::WithBounds(bounds)
}

/// Sets the number of terminal columns the view renders into.
pub fn with_width(width: usize) -> StepperOption {
    StepperOption::WithWidth(width)
}

/// Chooses what `move_to` does for the step that is already active.
pub fn with_same_index_policy(policy: SameIndexPolicy) -> StepperOption {
    StepperOption::WithSameIndexPolicy(policy)
}

/// Sets the device pixel scale handed to label graphics.
pub fn with_contents_scale(scale: f64) -> StepperOption {
    StepperOption::WithContentsScale(scale)
}

/// Sets the timing curve of track animations.
pub fn with_easing(easing: Easing) -> StepperOption {
    StepperOption::WithEasing(easing)
}

/// A horizontal step indicator.
///
/// Nodes are spread evenly across [`bounds`](Self::bounds), one per label,
/// and joined by three stacked tracks. The active track runs up to the
/// current step and the completed track up to the step before it; both
/// animate whenever the step changes.
///
/// Setting labels, theme or bounds rebuilds the graphics synchronously.
/// Moving between steps only recolors nodes and schedules track animations,
/// returning the command that drives them.
///
/// # Examples
///
/// ```rust
/// use bubbletea_stepper::geometry::Size;
/// use bubbletea_stepper::layers::TrackKind;
/// use bubbletea_stepper::stepper::{new, with_bounds};
///
/// let mut stepper = new(&[with_bounds(Size::new(400.0, 100.0))]);
/// let _cmd = stepper
///     .set_labels(vec!["Hello".into(), "How".into(), "Are".into(), "YOU".into()])
///     .unwrap();
///
/// let _cmd = stepper.move_to(2);
/// assert_eq!(stepper.current_index(), 2);
/// assert_eq!(stepper.completed_index(), 1);
///
/// let active = stepper.layers().track(TrackKind::Active);
/// assert!((active.target_stroke_end() - 2.0 / 3.0).abs() < 1e-9);
/// ```
///
/// ## Integration with bubbletea-rs
///
/// ```rust
/// use bubbletea_stepper::stepper;
/// use bubbletea_rs::{Model as TeaModel, Cmd, Msg};
///
/// struct App {
///     steps: stepper::Model,
/// }
///
/// impl TeaModel for App {
///     fn init() -> (Self, Option<Cmd>) {
///         let mut steps = stepper::new(&[stepper::with_width(60)]);
///         let cmd = steps
///             .set_labels(vec!["Cart".into(), "Address".into(), "Pay".into()])
///             .unwrap_or(None);
///         (Self { steps }, cmd)
///     }
///
///     fn update(&mut self, msg: Msg) -> Option<Cmd> {
///         // Forward animation frames to the stepper
///         self.steps.update(msg)
///     }
///
///     fn view(&self) -> String {
///         self.steps.view()
///     }
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Model {
    /// Terminal columns `view` renders into.
    pub width: usize,

    labels: Vec<String>,
    theme: ThemeConfig,
    bounds: Size,
    contents_scale: f64,
    easing: Easing,
    same_index_policy: SameIndexPolicy,

    geometry: NodeGeometry,
    layers: LayerModel,
    state: ProgressState,
    scheduler: AnimationScheduler,
}

/// Creates a stepper with no labels.
///
/// Defaults: the default [`ThemeConfig`], 40 columns, bounds of one point
/// per column, contents scale 1, ease-out animations and
/// [`SameIndexPolicy::Skip`].
pub fn new(opts: &[StepperOption]) -> Model {
    let mut m = Model {
        width: DEFAULT_WIDTH,
        labels: Vec::new(),
        theme: ThemeConfig::default(),
        bounds: Size::new(DEFAULT_WIDTH as f64, DEFAULT_HEIGHT),
        contents_scale: 1.0,
        easing: Easing::default(),
        same_index_policy: SameIndexPolicy::default(),
        geometry: NodeGeometry::default(),
        layers: LayerModel::new(),
        state: ProgressState::default(),
        scheduler: AnimationScheduler::new(),
    };

    for opt in opts {
        opt.apply(&mut m);
    }

    m
}

impl Model {
    /// Replaces the labels, discarding every node graphic and returning to
    /// the first step.
    ///
    /// # Errors
    ///
    /// Returns [`StepperError::EmptyLabels`] for an empty sequence; the
    /// stepper is left unchanged.
    pub fn set_labels(&mut self, labels: Vec<String>) -> Result<Option<Cmd>, StepperError> {
        if labels.is_empty() {
            return Err(StepperError::EmptyLabels);
        }

        debug!(count = labels.len(), "replacing stepper labels");
        self.labels = labels;
        self.state.reset();
        self.geometry = layout(self.bounds, self.labels.len(), self.theme.indicator_radius);
        self.layers
            .rebuild_all(&self.geometry, &self.theme, &self.labels, self.contents_scale);

        Ok(Some(self.update_layers()))
    }

    /// Replaces the theme and restyles every graphic in place.
    ///
    /// # Errors
    ///
    /// Returns [`StepperError::InvalidTheme`] when the theme fails
    /// [`ThemeConfig::validate`]; the current theme stays.
    pub fn set_theme(&mut self, theme: ThemeConfig) -> Result<Option<Cmd>, StepperError> {
        theme.validate()?;
        debug!("applying stepper theme");
        self.theme = theme;
        Ok(self.setup_layers())
    }

    /// Layout hook: call whenever the view's allocated rectangle changes.
    ///
    /// Geometry and graphics are recomputed and the tracks restart their
    /// animations from the last recorded positions.
    pub fn set_bounds(&mut self, bounds: Size) -> Option<Cmd> {
        self.bounds = bounds;
        self.setup_layers()
    }

    /// Changes the same-index behavior of [`move_to`](Self::move_to).
    pub fn set_same_index_policy(&mut self, policy: SameIndexPolicy) {
        self.same_index_policy = policy;
    }

    /// Moves to step `index`.
    ///
    /// Returns the command that animates the tracks, or `None` when the
    /// step is already active under [`SameIndexPolicy::Skip`].
    ///
    /// # Panics
    ///
    /// Panics with [`StepperError::IndexOutOfRange`]'s message when `index`
    /// is not a valid step. Use [`try_move_to`](Self::try_move_to) to get
    /// the error instead.
    pub fn move_to(&mut self, index: usize) -> Option<Cmd> {
        match self.try_move_to(index) {
            Ok(cmd) => cmd,
            Err(err) => panic!("{err}"),
        }
    }

    /// Fallible [`move_to`](Self::move_to).
    ///
    /// # Errors
    ///
    /// Returns [`StepperError::IndexOutOfRange`] without touching any state.
    pub fn try_move_to(&mut self, index: usize) -> Result<Option<Cmd>, StepperError> {
        self.check_index(index)?;

        self.state.snapshot_completed();
        if index == self.state.current_index() && self.same_index_policy == SameIndexPolicy::Skip
        {
            trace!(index, "step already active");
            return Ok(None);
        }

        debug!(from = self.state.current_index(), to = index, "moving stepper");
        self.state.transition_to(index);
        Ok(Some(self.update_layers()))
    }

    /// Moves to the next step.
    ///
    /// # Panics
    ///
    /// Panics with [`StepperError::IndexOutOfRange`]'s message when the last
    /// step is already active. Use [`try_advance`](Self::try_advance) to get
    /// the error instead.
    pub fn advance(&mut self) -> Cmd {
        match self.try_advance() {
            Ok(cmd) => cmd,
            Err(err) => panic!("{err}"),
        }
    }

    /// Fallible [`advance`](Self::advance).
    ///
    /// # Errors
    ///
    /// Returns [`StepperError::IndexOutOfRange`] without touching any state.
    pub fn try_advance(&mut self) -> Result<Cmd, StepperError> {
        let next = self.state.current_index() + 1;
        self.check_index(next)?;

        debug!(to = next, "advancing stepper");
        self.state.snapshot_completed();
        self.state.transition_to(next);
        Ok(self.update_layers())
    }

    /// Steps the track animations when `msg` is one of this stepper's
    /// frames, returning the command for the following frame.
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        let frame = msg.downcast_ref::<FrameMsg>()?;
        if !self.scheduler.accepts(frame) {
            return None;
        }

        // Everything has settled; stop ticking.
        if !self.layers.is_animating() {
            return None;
        }

        let running = self
            .layers
            .step_animations(AnimationScheduler::frame_interval());
        trace!(
            active = self.layers.track(TrackKind::Active).presented_stroke_end(),
            completed = self.layers.track(TrackKind::Completed).presented_stroke_end(),
            "stepper frame"
        );

        running.then(|| self.scheduler.next_frame())
    }

    /// Renders the stepper as two styled terminal lines.
    pub fn view(&self) -> String {
        render::render(&self.layers, self.bounds, self.width)
    }

    /// Whether a track animation still has frames to play.
    pub fn is_animating(&self) -> bool {
        self.layers.is_animating()
    }

    /// The active step.
    pub fn current_index(&self) -> usize {
        self.state.current_index()
    }

    /// The last completed step, `-1` while nothing is completed.
    pub fn completed_index(&self) -> isize {
        self.state.completed_index()
    }

    /// Full progress state, including the transition snapshots.
    pub fn state(&self) -> &ProgressState {
        &self.state
    }

    /// Configured labels.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Current theme.
    pub fn theme(&self) -> &ThemeConfig {
        &self.theme
    }

    /// The view's allocated rectangle.
    pub fn bounds(&self) -> Size {
        self.bounds
    }

    /// Node centers from the last layout.
    pub fn geometry(&self) -> &NodeGeometry {
        &self.geometry
    }

    /// Graphics from the last layout and transition.
    pub fn layers(&self) -> &LayerModel {
        &self.layers
    }

    /// Current same-index behavior.
    pub fn same_index_policy(&self) -> SameIndexPolicy {
        self.same_index_policy
    }

    fn check_index(&self, index: usize) -> Result<(), StepperError> {
        if index < self.labels.len() {
            Ok(())
        } else {
            Err(StepperError::IndexOutOfRange {
                index,
                count: self.labels.len(),
            })
        }
    }

    fn component_count(&self) -> usize {
        self.labels.len().saturating_sub(1)
    }

    // Fraction of the track up to node `index`. With a single node the
    // track has no length, so it always counts as fully drawn.
    fn fraction(&self, index: isize) -> f64 {
        let count = self.component_count();
        if count == 0 {
            return 1.0;
        }
        (index as f64 / count as f64).clamp(0.0, 1.0)
    }

    fn setup_layers(&mut self) -> Option<Cmd> {
        if self.labels.is_empty() {
            return None;
        }

        self.geometry = layout(self.bounds, self.labels.len(), self.theme.indicator_radius);
        self.layers.rebuild_tracks_only(&self.geometry, &self.theme);
        self.layers
            .refresh_nodes(&self.geometry, &self.theme, &self.labels, self.contents_scale);
        debug!(
            width = self.bounds.width,
            height = self.bounds.height,
            nodes = self.geometry.len(),
            "stepper layout"
        );

        Some(self.update_layers())
    }

    fn update_layers(&mut self) -> Cmd {
        let duration = self.theme.stroke_animation_duration;
        let current = self.state.current_index();
        let completed = self.state.completed_index();

        if completed >= 0 {
            let from = self
                .state
                .previous_completed_index()
                .map(|index| self.fraction(index));
            let to = self.fraction(completed);
            self.layers
                .animate_track_fraction(TrackKind::Completed, from, to, duration, self.easing);
            for index in 0..=completed as usize {
                self.layers
                    .set_node_state(index, Classification::Completed, &self.theme);
            }
        } else {
            self.layers
                .animate_track_fraction(TrackKind::Completed, None, 0.0, duration, self.easing);
        }

        let from = self
            .state
            .previous_index()
            .map(|index| self.fraction(index as isize));
        let to = self.fraction(current as isize);
        self.layers
            .animate_track_fraction(TrackKind::Active, from, to, duration, self.easing);
        self.layers
            .set_node_state(current, Classification::Active, &self.theme);

        for index in current + 1..self.layers.node_count() {
            self.layers
                .set_node_state(index, Classification::Inactive, &self.theme);
        }

        self.scheduler.restart()
    }

    #[cfg(test)]
    pub(crate) fn scheduler(&self) -> &AnimationScheduler {
        &self.scheduler
    }
}

impl BubbleTeaModel for Model {
    fn init() -> (Self, std::option::Option<Cmd>) {
        let model = new(&[]);
        (model, std::option::Option::None)
    }

    fn update(&mut self, msg: Msg) -> std::option::Option<Cmd> {
        self.update(msg)
    }

    fn view(&self) -> String {
        self.view()
    }
}

impl Default for Model {
    fn default() -> Self {
        new(&[])
    }
}
