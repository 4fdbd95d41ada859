// Skill matching: the cosine-similarity engine and its HTTP surface.
// The engine is pure; no LLM or network calls happen here.

pub mod engine;
pub mod handlers;
