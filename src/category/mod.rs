//! Income and expense categories used to label transactions.

mod create;
mod options;
mod registry;

pub use create::{category_form_view, create_category_endpoint};
pub use options::{category_options_view, get_category_options};
pub use registry::{AddCategoryOutcome, CategoryName, CategoryRegistry};
