// Idea generation engine.
// Implements: strategy pool, shuffle + dedupe + truncate, abstracts, takeaways,
// fit reasons and the plain-text export. No network calls here.

pub mod casing;
pub mod download;
pub mod generator;
pub mod handlers;
pub mod lexicon;
pub mod pitch;
pub mod strategies;
