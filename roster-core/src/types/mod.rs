//! 类型定义模块

mod form;
mod record;

pub use form::{FormField, RecordForm};
pub use record::{RecordId, UserRecord};
