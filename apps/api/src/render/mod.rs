// Output side: turning the rewritten resume into a downloadable document.

pub mod docx;
pub mod store;
