#![warn(missing_docs)]
#![doc(html_root_url = "https://docs.rs/bubbletea-stepper/")]

//! # bubbletea-stepper
//!
//! An animated step indicator for terminal applications built with
//! [bubbletea-rs](https://github.com/joshka/bubbletea-rs).
//!
//! ## Overview
//!
//! A stepper shows a sequence of labeled steps as nodes on a horizontal
//! track. Steps before the current one are *completed*, the current step is
//! *active*, and the rest are *inactive*. Moving between steps recolors the
//! nodes and animates the active and completed tracks to their new lengths.
//!
//! The component follows the Elm Architecture like the rest of the bubbletea
//! ecosystem: mutations return a `Cmd` that drives the animation, `update()`
//! consumes the resulting frame messages, and `view()` renders the current
//! frame.
//!
//! ```rust
//! use bubbletea_stepper::prelude::*;
//!
//! let mut steps = stepper_new(&[with_width(48)]);
//! let _cmd = steps
//!     .set_labels(vec!["Hello".into(), "How".into(), "Are".into(), "YOU".into()])
//!     .unwrap();
//! let _cmd = steps.move_to(2);
//!
//! assert_eq!(steps.current_index(), 2);
//! assert_eq!(steps.view().lines().count(), 2);
//! ```
//!
//! ## Modules
//!
//! | Module | Contents |
//! |--------|----------|
//! | `stepper` | The component: progress state, transitions, rendering |
//! | `theme` | Colors, sizes and animation timing |
//! | `geometry` | Node placement inside the view's bounds |
//! | `layers` | Retained track, indicator and label graphics |
//! | `animation` | Easing curves, stroke animations and frame scheduling |
//! | `error` | Input validation and bounds errors |

pub mod animation;
pub mod error;
pub mod geometry;
pub mod layers;
pub mod stepper;
pub mod theme;

pub use error::StepperError;
pub use stepper::Model as Stepper;
pub use theme::ThemeConfig;

/// Prelude module for convenient imports.
///
/// ```rust
/// use bubbletea_stepper::prelude::*;
///
/// let steps: Stepper = stepper_new(&[]);
/// assert_eq!(steps.current_index(), 0);
/// ```
pub mod prelude {
    pub use crate::animation::{Easing, FrameMsg as StepperFrameMsg};
    pub use crate::error::StepperError;
    pub use crate::geometry::{Point, Size};
    pub use crate::layers::{Classification, TrackKind};
    pub use crate::stepper::{
        new as stepper_new, with_bounds, with_contents_scale, with_easing,
        with_same_index_policy, with_theme, with_width, Model as Stepper, ProgressState,
        SameIndexPolicy, StepperOption,
    };
    pub use crate::theme::ThemeConfig;
}
