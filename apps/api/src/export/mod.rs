// Export API. Placeholder behavior only: real rendering of a template to
// raster/vector/document formats is a separate subsystem that does not exist
// yet — each format returns literal placeholder bytes with the right headers.

pub mod handlers;
