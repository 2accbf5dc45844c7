//! Content templates for scheduled posts
//!
//! - **catalog**: literal (title, body) variants per kind and category
//! - **selector**: deterministic, title-keyed variant choice with category fallback
//! - **details**: fixed checklist / guide / tip per kind

pub mod catalog;
pub mod details;
pub mod selector;

pub use catalog::TemplateVariant;
pub use details::{get_details, get_template_details};
pub use selector::{Bucket, TemplateSelector, variant_index};
