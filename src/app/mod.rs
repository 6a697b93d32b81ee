mod root;
mod state;

pub(crate) use state::{Command, SessionState, Theme};

pub use root::App;
