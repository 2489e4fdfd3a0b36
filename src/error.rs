use thiserror::Error;

#[derive(Error, Debug)]
pub enum MatmulError {
    #[error("cannot partition work across zero slots")]
    NoSlots,
    #[error("out of memory allocating a partition plan for {slots} slots")]
    PlanAllocation { slots: usize },
    #[error("out of memory allocating a {rows}x{cols} matrix")]
    Allocation { rows: usize, cols: usize },
    #[error("shape mismatch: {rows}x{cols} needs {expected} elements, got {got}")]
    ShapeMismatch {
        rows: usize,
        cols: usize,
        expected: usize,
        got: usize,
    },
    #[error("failed to spawn worker for slot {slot}: {source}")]
    Spawn {
        slot: usize,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, MatmulError>;
