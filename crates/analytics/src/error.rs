use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalyticsError {
    #[error("Not enough data: need at least {required} values, got {available}")]
    InsufficientData { required: usize, available: usize },

    #[error("Calculation error: division by zero, the value at position {position} is zero")]
    DivisionByZero { position: usize },

    #[error("Invalid input: position {position} yields a non-finite value ({value})")]
    InvalidValue { position: usize, value: f64 },

    #[error("Error in calculation: {0}")]
    Calculation(String),
}
