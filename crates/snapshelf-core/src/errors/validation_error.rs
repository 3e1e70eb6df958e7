/// Request validation errors raised at the entry-point boundary.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("item name must not be empty")]
    EmptyName,

    #[error("item name is {length} characters, maximum is {max}")]
    NameTooLong { length: usize, max: usize },
}
