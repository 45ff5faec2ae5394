pub mod annotation;
pub mod axis;
pub mod categorical;
pub mod colors;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod layout;
pub mod lines;
pub mod plotly;
pub mod presets;
pub mod settings;
pub mod ticks;

pub use categorical::{encode, EncodedColumn};
pub use colors::{ColorAssignment, CurveColor};
pub use diagnostics::{Diagnostic, LayoutDiagnostics};
pub use domain::TrackDomain;
pub use error::LayoutError;
pub use layout::{DepthAxis, Layout, LayoutComposer, LayoutOutput, LayoutRequest};
pub use settings::{
    load_layout_settings_file, normalize_layout_settings, save_layout_settings_file,
    LayoutSettings,
};
