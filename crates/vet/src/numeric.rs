use std::fmt::Debug;

/// Primitive integer or floating point value usable in tolerance assertions.
pub trait Number: Copy + PartialOrd + Debug {
    /// Additive identity.
    fn zero() -> Self;

    /// Lossy conversion used by the validity guard.
    fn to_f64(self) -> f64;

    /// Whether `-delta <= self - other <= delta`, computed without overflow.
    fn within(self, other: Self, delta: Self) -> bool;
}

macro_rules! signed_number {
    ($($t:ty => $u:ty),* $(,)?) => {
        $(
            impl Number for $t {
                fn zero() -> Self {
                    0
                }

                fn to_f64(self) -> f64 {
                    self as f64
                }

                fn within(self, other: Self, delta: Self) -> bool {
                    delta >= 0 && self.abs_diff(other) <= delta as $u
                }
            }
        )*
    };
}

macro_rules! unsigned_number {
    ($($t:ty),* $(,)?) => {
        $(
            impl Number for $t {
                fn zero() -> Self {
                    0
                }

                fn to_f64(self) -> f64 {
                    self as f64
                }

                fn within(self, other: Self, delta: Self) -> bool {
                    self.abs_diff(other) <= delta
                }
            }
        )*
    };
}

macro_rules! float_number {
    ($($t:ty),* $(,)?) => {
        $(
            impl Number for $t {
                fn zero() -> Self {
                    0.0
                }

                fn to_f64(self) -> f64 {
                    self as f64
                }

                fn within(self, other: Self, delta: Self) -> bool {
                    let difference = self - other;
                    difference >= -delta && difference <= delta
                }
            }
        )*
    };
}

signed_number!(i8 => u8, i16 => u16, i32 => u32, i64 => u64, i128 => u128, isize => usize);
unsigned_number!(u8, u16, u32, u64, u128, usize);
float_number!(f32, f64);

/// Returns false if `n` is NaN or infinite; always true for integers.
pub fn numeric<N: Number>(n: N) -> bool {
    n.to_f64().is_finite()
}
