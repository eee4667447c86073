use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum Error {
    #[error("usage must be a finite number, got {0}")]
    InvalidUsage(f64),

    #[error("the free-usage threshold must be a finite non-negative number")]
    InvalidFreeThreshold,

    #[error("the tariff has no slabs")]
    NoSlabs,

    #[error("the first slab `{0}` must start at zero")]
    FirstSlabNotAtZero(String),

    #[error("slab `{label}` must have a finite non-negative rate")]
    InvalidRate { label: String },

    #[error("slab `{label}` must end after it starts")]
    EmptySlab { label: String },

    #[error("slab `{next}` must start exactly where `{previous}` ends")]
    Gap { previous: String, next: String },

    #[error("only the last slab may be unbounded, but `{0}` is followed by another slab")]
    UnboundedNotLast(String),

    #[error("the last slab `{0}` must be unbounded")]
    LastSlabBounded(String),
}
