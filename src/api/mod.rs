/*
 * Responsibility
 * - API の公開ポイント (routes() の re-export)
 */
pub mod extractors;
pub mod handlers;
mod routes;

#[cfg(test)]
pub(crate) mod test_support;

pub use routes::routes;
