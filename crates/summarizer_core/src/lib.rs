//! Summarizer core: pure state machine and view-model helpers.
mod effect;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::Msg;
pub use state::{
    AppState, AttemptId, Panel, StreamStatus, COPY_ACK_LABEL, COPY_LABEL,
    COPY_LABEL_RESET_AFTER,
};
pub use update::update;
pub use view_model::AppViewModel;
