pub mod format;
pub mod page;
pub mod view;

pub use page::{CatalogTemplate, DetailsTemplate, IndexTemplate};
pub use view::{ContainerView, GridTemplate};
