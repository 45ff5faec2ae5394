use definition::TrackConfigError;
use palette::PaletteError;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    #[error(transparent)]
    Track(#[from] TrackConfigError),
    #[error("palette error: {0}")]
    Palette(#[from] PaletteError),
    #[error("invalid layout settings: {0}")]
    InvalidSettings(String),
    #[error("{0}")]
    SettingsFile(String),
    #[error("no preset track named '{0}'")]
    UnknownPreset(String),
}
