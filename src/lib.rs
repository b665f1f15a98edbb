//! Privacy-first, on-device menstrual cycle tracker.
//!
//! The prediction engine ([`prediction`]) is pure date arithmetic:
//! from a period start date and the cycle and period lengths it
//! derives the next period, ovulation day, and fertile window, and
//! projects the next six cycles. Everything around it is thin glue:
//! form parsing ([`form`]), JSON-file persistence ([`storage`]), HTML
//! rendering ([`render`]), a theme preference ([`theme`]), and the
//! controller wiring them together ([`app`]).

pub mod app;
pub mod form;
pub mod models;
pub mod prediction;
pub mod render;
pub mod storage;
pub mod theme;

pub use app::App;
pub use form::{FormError, RawForm};
pub use models::{CycleInput, Prediction, ProjectedCycle, TrackerView};
pub use storage::{FileStore, KeyValueStore, StorageError};
pub use theme::Theme;
