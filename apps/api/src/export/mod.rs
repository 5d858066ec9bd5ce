// Document export: PDF/DOCX placeholders and the plain-text renderer.

pub mod generator;
pub mod handlers;
