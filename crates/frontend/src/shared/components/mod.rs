pub mod code_sample;
pub mod page_header;

pub use code_sample::CodeSampleView;
pub use page_header::PageHeader;
