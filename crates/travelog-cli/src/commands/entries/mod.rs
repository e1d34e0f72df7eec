pub mod add;
pub mod delete;
pub mod html;
pub mod list;

pub use add::handle_add;
pub use delete::handle_delete;
pub use html::handle_html;
pub use list::handle_list;
