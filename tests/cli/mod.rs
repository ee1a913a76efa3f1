/// CLI integration tests exercising the built binary with assert_cmd.
///
/// None of these need a database: `render` is pure, and `apply` / `exists`
/// are only exercised up to the point where a connection would be opened.
pub mod render;
