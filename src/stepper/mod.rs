//! Step indicator component for Bubble Tea applications.
//!
//! A stepper draws a row of labeled nodes joined by a track. Nodes before
//! the current step are completed, the current step is active and the rest
//! are inactive; the tracks animate between positions whenever the step
//! changes.
//!
//! # Basic Usage
//!
//! ```rust
//! use bubbletea_stepper::stepper::{new, with_width};
//!
//! let mut steps = new(&[with_width(60)]);
//! let _cmd = steps
//!     .set_labels(vec!["Cart".into(), "Address".into(), "Pay".into()])
//!     .unwrap();
//!
//! let _cmd = steps.advance();
//! assert_eq!(steps.current_index(), 1);
//! assert_eq!(steps.completed_index(), 0);
//! ```
//!
//! # Out-of-range steps
//!
//! Moving past the last step is a caller bug and panics. The `try_*`
//! methods report it instead:
//!
//! ```rust
//! use bubbletea_stepper::error::StepperError;
//! use bubbletea_stepper::stepper::new;
//!
//! let mut steps = new(&[]);
//! let _ = steps.set_labels(vec!["Only".into()]);
//! assert_eq!(
//!     steps.try_advance().err(),
//!     Some(StepperError::IndexOutOfRange { index: 1, count: 1 })
//! );
//! ```

pub mod model;
pub mod render;
pub mod state;


pub use model::{
    new, with_bounds, with_contents_scale, with_easing, with_same_index_policy, with_theme,
    with_width, Model, SameIndexPolicy, StepperOption,
};
pub use state::ProgressState;
