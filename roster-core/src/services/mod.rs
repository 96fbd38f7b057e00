//! 业务逻辑服务层

mod form_controller;
mod list_renderer;
mod record_query;

pub use form_controller::{Command, FormController, FormMode, Outcome, SubmitLabel};
pub use list_renderer::{
    render, render_filtered, ActionKind, ItemAction, ListEntry, RenderedList,
};
pub use record_query::RecordQuery;
