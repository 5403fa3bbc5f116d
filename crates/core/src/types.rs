/// Entity identifiers are the backend's integer primary keys.
pub type DbId = i64;
