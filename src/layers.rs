//! Retained graphics for the stepper.
//!
//! The [`LayerModel`] owns everything that gets drawn: three stacked tracks
//! (inactive underneath, then active, then completed on top), one indicator
//! disc per node and one text label per node. Every graphic carries a
//! [`LayerId`] that stays stable while the graphic is updated in place, so a
//! host that mirrors the scene can tell an update from a replacement.

use crate::animation::{Easing, StrokeAnimation};
use crate::geometry::{NodeGeometry, Point, Rect, Segment};
use crate::theme::ThemeConfig;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

static LAST_LAYER_ID: AtomicU64 = AtomicU64::new(0);

/// Stable handle of one graphic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LayerId(u64);

impl LayerId {
    fn next() -> Self {
        LayerId(LAST_LAYER_ID.fetch_add(1, Ordering::SeqCst) + 1)
    }
}

/// Visual category of a node relative to the current step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// After the current step.
    Inactive,
    /// The current step.
    Active,
    /// Before the current step.
    Completed,
}

/// Which of the three tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackKind {
    /// Base track, always fully drawn.
    Inactive,
    /// Runs up to the current step.
    Active,
    /// Runs up to the last completed step.
    Completed,
}

/// A stroked path spanning all nodes.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackGraphic {
    id: LayerId,
    /// Path from the first node to the last.
    pub path: Option<Segment>,
    /// Stroke color.
    pub stroke_color: String,
    /// Stroke width.
    pub line_width: f64,
    /// Model value of the drawn fraction; an animation overrides it while present.
    pub stroke_end: f64,
    animation: Option<StrokeAnimation>,
}

impl TrackGraphic {
    fn new() -> Self {
        Self {
            id: LayerId::next(),
            path: None,
            stroke_color: String::new(),
            line_width: 0.0,
            stroke_end: 0.0,
            animation: None,
        }
    }

    /// Stable handle.
    pub fn id(&self) -> LayerId {
        self.id
    }

    /// Fraction currently on screen.
    pub fn presented_stroke_end(&self) -> f64 {
        self.animation
            .as_ref()
            .map_or(self.stroke_end, StrokeAnimation::value)
    }

    /// Fraction the track settles at.
    pub fn target_stroke_end(&self) -> f64 {
        self.animation.as_ref().map_or(self.stroke_end, |a| a.to)
    }

    /// Latest animation, finished or not.
    pub fn animation(&self) -> Option<&StrokeAnimation> {
        self.animation.as_ref()
    }

    /// True while an animation still has frames to play.
    pub fn is_animating(&self) -> bool {
        self.animation.as_ref().is_some_and(|a| !a.is_finished())
    }
}

/// Filled disc marking one node.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeGraphic {
    id: LayerId,
    /// Disc center.
    pub center: Point,
    /// Disc radius.
    pub radius: f64,
    /// Fill color.
    pub fill_color: String,
}

impl NodeGraphic {
    /// Stable handle.
    pub fn id(&self) -> LayerId {
        self.id
    }
}

/// Text under one node.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelGraphic {
    id: LayerId,
    /// Text to draw.
    pub text: String,
    /// Frame the text is centered in.
    pub frame: Rect,
    /// Font family.
    pub font: String,
    /// Font size.
    pub font_size: f64,
    /// Text color.
    pub foreground_color: String,
    /// Device pixel scale for rasterizing the text.
    pub contents_scale: f64,
}

impl LabelGraphic {
    /// Stable handle.
    pub fn id(&self) -> LayerId {
        self.id
    }
}

/// All graphics of one stepper.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerModel {
    inactive: TrackGraphic,
    active: TrackGraphic,
    completed: TrackGraphic,
    indicators: Vec<NodeGraphic>,
    labels: Vec<LabelGraphic>,
}

impl Default for LayerModel {
    fn default() -> Self {
        Self::new()
    }
}

impl LayerModel {
    /// Creates the three tracks with no nodes.
    pub fn new() -> Self {
        Self {
            inactive: TrackGraphic::new(),
            active: TrackGraphic::new(),
            completed: TrackGraphic::new(),
            indicators: Vec::new(),
            labels: Vec::new(),
        }
    }

    /// One of the tracks.
    pub fn track(&self, kind: TrackKind) -> &TrackGraphic {
        match kind {
            TrackKind::Inactive => &self.inactive,
            TrackKind::Active => &self.active,
            TrackKind::Completed => &self.completed,
        }
    }

    fn track_mut(&mut self, kind: TrackKind) -> &mut TrackGraphic {
        match kind {
            TrackKind::Inactive => &mut self.inactive,
            TrackKind::Active => &mut self.active,
            TrackKind::Completed => &mut self.completed,
        }
    }

    /// Tracks in drawing order, bottom first.
    pub fn tracks(&self) -> [&TrackGraphic; 3] {
        [&self.inactive, &self.active, &self.completed]
    }

    /// Indicator discs in node order.
    pub fn indicators(&self) -> &[NodeGraphic] {
        &self.indicators
    }

    /// Labels in node order.
    pub fn labels(&self) -> &[LabelGraphic] {
        &self.labels
    }

    /// Number of node graphics.
    pub fn node_count(&self) -> usize {
        self.indicators.len()
    }

    /// Drops every node and label graphic and recreates them, then resets
    /// the tracks. New graphics get new ids.
    pub fn rebuild_all(
        &mut self,
        geometry: &NodeGeometry,
        theme: &ThemeConfig,
        labels: &[String],
        contents_scale: f64,
    ) {
        self.indicators.clear();
        self.labels.clear();
        self.rebuild_tracks_only(geometry, theme);
        self.refresh_nodes(geometry, theme, labels, contents_scale);
    }

    /// Updates the track paths and styles in place.
    ///
    /// The inactive track is fully drawn; active and completed go back to
    /// zero and lose any animation.
    pub fn rebuild_tracks_only(&mut self, geometry: &NodeGeometry, theme: &ThemeConfig) {
        let path = geometry.track();

        for (kind, color, stroke_end) in [
            (TrackKind::Inactive, &theme.inactive_color, 1.0),
            (TrackKind::Active, &theme.active_color, 0.0),
            (TrackKind::Completed, &theme.completed_color, 0.0),
        ] {
            let track = self.track_mut(kind);
            track.path = path;
            track.stroke_color = color.clone();
            track.line_width = theme.line_width;
            track.stroke_end = stroke_end;
            track.animation = None;
        }
    }

    /// Makes sure exactly `n` node and label graphics exist, keeping the
    /// existing ones and their ids.
    pub fn ensure_count(&mut self, n: usize) {
        self.indicators.truncate(n);
        self.labels.truncate(n);
        while self.indicators.len() < n {
            self.indicators.push(NodeGraphic {
                id: LayerId::next(),
                center: Point::default(),
                radius: 0.0,
                fill_color: String::new(),
            });
        }
        while self.labels.len() < n {
            self.labels.push(LabelGraphic {
                id: LayerId::next(),
                text: String::new(),
                frame: Rect::default(),
                font: String::new(),
                font_size: 0.0,
                foreground_color: String::new(),
                contents_scale: 1.0,
            });
        }
    }

    /// Positions and styles every node and label from `geometry`, creating
    /// graphics only where none exist yet. All nodes come out inactive.
    pub fn refresh_nodes(
        &mut self,
        geometry: &NodeGeometry,
        theme: &ThemeConfig,
        labels: &[String],
        contents_scale: f64,
    ) {
        let count = geometry.len().min(labels.len());
        self.ensure_count(count);

        for (index, (indicator, label)) in self
            .indicators
            .iter_mut()
            .zip(self.labels.iter_mut())
            .enumerate()
        {
            indicator.center = geometry.centers[index];
            indicator.radius = theme.indicator_radius;
            indicator.fill_color = theme.inactive_color.clone();

            label.text = labels[index].clone();
            label.frame = geometry.label_frame(index).unwrap_or_default();
            label.font = theme.font.clone();
            label.font_size = theme.font_size;
            label.foreground_color = theme.inactive_color.clone();
            label.contents_scale = contents_scale;
        }
    }

    /// Colors node `index` and its label for `classification`.
    ///
    /// # Panics
    ///
    /// Panics if `index` has no graphic.
    pub fn set_node_state(
        &mut self,
        index: usize,
        classification: Classification,
        theme: &ThemeConfig,
    ) {
        let color = theme.color_for(classification);
        self.indicators[index].fill_color = color.to_string();
        self.labels[index].foreground_color = color.to_string();
    }

    /// Schedules a fraction animation on `kind`, replacing any earlier one.
    ///
    /// Without `from` the animation starts at whatever fraction is on screen.
    /// The inactive track never animates and is left untouched.
    pub fn animate_track_fraction(
        &mut self,
        kind: TrackKind,
        from: Option<f64>,
        to: f64,
        duration: Duration,
        easing: Easing,
    ) {
        if kind == TrackKind::Inactive {
            return;
        }
        let track = self.track_mut(kind);
        let from = from.unwrap_or_else(|| track.presented_stroke_end());
        track.animation = Some(StrokeAnimation::new(from, to, duration, easing));
    }

    /// Plays one frame on every track. Returns true while any track still
    /// has frames left.
    pub fn step_animations(&mut self, dt: Duration) -> bool {
        let mut running = false;
        for kind in [TrackKind::Active, TrackKind::Completed] {
            if let Some(animation) = self.track_mut(kind).animation.as_mut() {
                animation.step(dt);
                running |= !animation.is_finished();
            }
        }
        running
    }

    /// True while either animated track still has frames left.
    pub fn is_animating(&self) -> bool {
        self.active.is_animating() || self.completed.is_animating()
    }
}
