//! The fixed set of experiments the suite runs.

/// One performance idiom under measurement
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Experiment {
    Summation,
    Inlining,
    Unrolling,
    ShortStrings,
    Dispatch,
    Arithmetic,
    MatrixAccess,
    Fragmentation,
}

impl Experiment {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Summation => "Array Summation",
            Self::Inlining => "Inlined vs. Outlined Calls",
            Self::Unrolling => "Loop Unrolling",
            Self::ShortStrings => "Short-String Buffers",
            Self::Dispatch => "Virtual vs. Direct Dispatch",
            Self::Arithmetic => "Arithmetic Micro-Variants",
            Self::MatrixAccess => "Matrix Access Patterns",
            Self::Fragmentation => "Allocation Fragmentation",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Summation => "Linear sum over a large array of ones",
            Self::Inlining => "Same addition behind always-inline and never-inline helpers",
            Self::Unrolling => "Element copy with a plain loop and a 4-way unrolled loop",
            Self::ShortStrings => "Fresh heap string vs. reused heap buffer vs. stack buffer",
            Self::Dispatch => "Trait-object call vs. concrete call on one instance",
            Self::Arithmetic => "Multiply/shift/add doubling and modulo/mask remainder",
            Self::MatrixAccess => "Per-cell grid lookup vs. cached row slice",
            Self::Fragmentation => "Scattered boxed blocks with random frees vs. one buffer",
        }
    }

    /// Every experiment, in report order
    pub fn all() -> &'static [Experiment] {
        &[
            Self::Summation,
            Self::Inlining,
            Self::Unrolling,
            Self::ShortStrings,
            Self::Dispatch,
            Self::Arithmetic,
            Self::MatrixAccess,
            Self::Fragmentation,
        ]
    }
}
