//! Prop contracts for the Filament flow editor widgets.
//!
//! Each contract describes the inputs one presentational widget needs from
//! its parent: current values, option lists, layout discriminators, and the
//! callbacks through which the widget reports changes back. Contracts are
//! transient parameter bundles; they carry no identity and no lifecycle
//! beyond the render pass that consumes them.

pub mod callback;
pub mod contracts;
pub mod error;
pub mod kind;
pub mod placement;
pub mod side;

pub mod prelude {
    pub use crate::callback::{Callback, ValueChange};
    pub use crate::error::WidgetError;
    pub use crate::kind::WidgetKind;
    pub use crate::placement::Placement;
    pub use crate::side::Side;

    pub use crate::contracts::*;
}
