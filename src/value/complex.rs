//! Complex number host types.

/// A Go `complex128`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Complex128 {
    pub re: f64,
    pub im: f64,
}

/// A Go `complex64`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Complex64 {
    pub re: f32,
    pub im: f32,
}

impl Complex128 {
    pub const fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }
}

impl Complex64 {
    pub const fn new(re: f32, im: f32) -> Self {
        Self { re, im }
    }
}
