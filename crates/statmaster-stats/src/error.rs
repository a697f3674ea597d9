/// A sample that cannot be summarized.
///
/// Every variant is an invalid argument on the caller's side: the computation
/// itself never fails on a valid sample.
#[derive(Debug, Clone, PartialEq, derive_more::Display, derive_more::Error)]
pub enum SampleError {
    /// The sample has no values.
    #[display("sample is empty")]
    Empty,
    /// A value is NaN or infinite.
    #[display("value #{} is not a finite number ({value})", index + 1)]
    NotANumber { index: usize, value: f64 },
    /// A token typed by the user is not a number.
    #[display("value #{} is not a number: {token:?}", index + 1)]
    InvalidToken { index: usize, token: String },
}
