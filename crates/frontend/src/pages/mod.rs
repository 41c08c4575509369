pub mod doc_page;
pub mod home;
pub mod not_found;

pub use doc_page::{render_doc_page, DocRoute};
pub use home::HomePage;
pub use not_found::NotFoundPage;
