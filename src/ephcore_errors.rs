use thiserror::Error;

#[derive(Error, Debug)]
pub enum EphCoreError {
    #[error("Invalid precession model: {0}")]
    InvalidPrecessionModel(String),

    #[error("Invalid Chebyshev segment: {0}")]
    InvalidChebyshevSegment(String),

    #[error("Julian date {jd} is outside the Chebyshev segment [{start}, {end}]")]
    OutsideChebyshevSegment { jd: f64, start: f64, end: f64 },

    #[error("Invalid date string: {0}")]
    InvalidDate(String),

    #[error("Date conversion error: {0}")]
    HifitimeError(#[from] hifitime::HifitimeError),
}

impl PartialEq for EphCoreError {
    fn eq(&self, other: &Self) -> bool {
        use EphCoreError::*;
        match (self, other) {
            (InvalidPrecessionModel(a), InvalidPrecessionModel(b)) => a == b,
            (InvalidChebyshevSegment(a), InvalidChebyshevSegment(b)) => a == b,
            (
                OutsideChebyshevSegment {
                    jd: a,
                    start: sa,
                    end: ea,
                },
                OutsideChebyshevSegment {
                    jd: b,
                    start: sb,
                    end: eb,
                },
            ) => a == b && sa == sb && ea == eb,
            (InvalidDate(a), InvalidDate(b)) => a == b,

            // hifitime errors carry no comparable payload: same variant is enough
            (HifitimeError(_), HifitimeError(_)) => true,

            _ => false,
        }
    }
}
