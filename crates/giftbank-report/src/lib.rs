//! giftbank-report — HTML exam reports and teacher contact cards.
//!
//! JSON persistence lives with [`giftbank_core::report::ExamReport`]; this
//! crate renders reports for people and emits vCard files.

pub mod html;
pub mod vcard;

pub use html::{generate_html, write_html_report};
pub use vcard::{write_vcard, TeacherCard, VCardError};
