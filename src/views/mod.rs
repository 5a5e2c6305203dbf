pub mod add_intern;
pub mod app;
pub mod edit_intern;
pub mod form;
pub mod intern_list;
pub mod not_found;

pub use add_intern::render_add_intern;
pub use app::render_app;
pub use edit_intern::render_edit_intern;
pub use intern_list::render_intern_list;
pub use not_found::render_not_found;
