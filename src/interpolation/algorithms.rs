//! Defines the interpolation algorithm variants 
//!
//! Provides the [`Algorithm`] enum, which enumerates all supported methods. 

/// Interpolation algorithm variants.
/// - [`Algorithm::Hermite`] divided-difference Hermite interpolation 
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Algorithm {
    Hermite, 
}

impl Algorithm {
    pub const fn algorithm_name(self) -> &'static str {
        match self {
            Algorithm::Hermite => "hermite",
        }
    }
}
impl std::fmt::Display for Algorithm { 
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { 
        write!(f, "{}", self.algorithm_name())
    }
}
