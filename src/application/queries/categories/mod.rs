mod get_by_id;
mod list;
mod service;

pub use list::ListCategoriesQuery;
pub use service::CategoryQueryService;
