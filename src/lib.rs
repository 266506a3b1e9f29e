pub mod bibliography;
pub mod citation;
pub mod common;
pub mod diagnose;
pub mod document;
pub mod fields;
pub mod i18n;
pub mod inspect;
pub mod issue;
pub mod report;
