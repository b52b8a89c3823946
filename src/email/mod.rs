//! Email body generation: summary dialect to HTML, and the document around it.

pub mod formatter;
pub mod template;

pub use formatter::format_summary;
pub use template::EmailComposer;
