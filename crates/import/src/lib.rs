pub mod clean;
pub mod csv;
pub mod settings;

pub use clean::{CleanEngine, CleanError, MAX_LABEL_CHARS};
pub use self::csv::{load_csv, load_file, LoadError};
pub use settings::{
    AccountSettings, BreakdownMode, CategoryMapping, DashboardSettings, Settings, SettingsError,
};
