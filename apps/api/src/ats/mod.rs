// Heuristic ATS compatibility scoring over a submitted résumé.

pub mod analyzer;
pub mod handlers;
