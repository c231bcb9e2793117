// Resume analysis: upload → extract → crew → feedback/rewrite/guidance → DOCX.

pub mod handlers;
pub mod pipeline;
