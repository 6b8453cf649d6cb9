//! Macro to define a vector type.
//!
//! # Arguments
//!
//! * `name` - The name of the vector type.
//! * `glam_type` - The underlying glam type.
//! * `array` - The array type.
//! * `fields` - The fields of the vector, in index order.
//!
macro_rules! define_vector_type {
    ($(#[$meta:meta])* $name:ident, $glam_type:ty, $array:ty, [$($field:ident),+]) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq)]
        pub struct $name {
            $(
                #[allow(missing_docs)]
                pub $field: f64
            ),+
        }

        impl $name {
            /// Number of components.
            pub const DIM: usize = [$(stringify!($field)),+].len();

            /// Zero vector.
            pub const ZERO: Self = Self {
                $($field: 0.0),+
            };

            /// Create a new vector from its components.
            #[inline]
            pub fn new($($field: f64),+) -> Self {
                Self { $($field),+ }
            }

            /// Create a vector from an array.
            #[inline]
            pub fn from_array(arr: $array) -> Self {
                let [$($field),+] = arr;
                Self { $($field),+ }
            }

            /// Convert the vector to an array.
            #[inline]
            pub fn to_array(self) -> $array {
                [$(self.$field),+]
            }

            /// Read the component at `index`.
            ///
            /// # Errors
            ///
            /// Returns [`VectorError::IndexOutOfBounds`](crate::VectorError) if
            /// `index` is not smaller than the dimension.
            pub fn get_item(&self, index: usize) -> Result<f64, $crate::error::VectorError> {
                self.to_array()
                    .get(index)
                    .copied()
                    .ok_or($crate::error::VectorError::IndexOutOfBounds {
                        index,
                        dim: Self::DIM,
                    })
            }

            /// Overwrite the component at `index`.
            ///
            /// # Errors
            ///
            /// Returns [`VectorError::IndexOutOfBounds`](crate::VectorError) if
            /// `index` is not smaller than the dimension.
            pub fn set_item(
                &mut self,
                index: usize,
                value: f64,
            ) -> Result<(), $crate::error::VectorError> {
                let component = [$(&mut self.$field),+]
                    .into_iter()
                    .nth(index)
                    .ok_or($crate::error::VectorError::IndexOutOfBounds {
                        index,
                        dim: Self::DIM,
                    })?;
                *component = value;
                Ok(())
            }

            /// Euclidean length (magnitude) of the vector.
            ///
            /// Components are scaled by the largest magnitude first, so the
            /// result neither overflows nor underflows for finite input.
            #[inline]
            pub fn length(self) -> f64 {
                let v: $glam_type = self.into();
                let max = v.abs().max_element();
                if max == 0.0 || !max.is_finite() {
                    return v.length();
                }
                max * (v / max).length()
            }

            /// Dot product between two vectors.
            #[inline]
            pub fn dot(self, rhs: Self) -> f64 {
                let a: $glam_type = self.into();
                let b: $glam_type = rhs.into();
                a.dot(b)
            }

            /// Rescale the vector in place to unit length.
            ///
            /// A zero vector has no direction: every component becomes NaN.
            #[inline]
            pub fn normalize(&mut self) {
                *self = self.normalized();
            }

            /// Return a unit length copy of the vector.
            #[inline]
            pub fn normalized(self) -> Self {
                let v: $glam_type = self.into();
                let v = v / v.abs().max_element();
                Self::from(v / v.length())
            }
        }

        impl std::ops::Index<usize> for $name {
            type Output = f64;

            #[inline]
            fn index(&self, index: usize) -> &Self::Output {
                [$(&self.$field),+]
                    .into_iter()
                    .nth(index)
                    .unwrap_or_else(|| {
                        panic!("index {index} out of bounds for {}", stringify!($name))
                    })
            }
        }

        impl std::ops::IndexMut<usize> for $name {
            #[inline]
            fn index_mut(&mut self, index: usize) -> &mut Self::Output {
                [$(&mut self.$field),+]
                    .into_iter()
                    .nth(index)
                    .unwrap_or_else(|| {
                        panic!("index {index} out of bounds for {}", stringify!($name))
                    })
            }
        }

        // Conversions to and from the underlying glam type.
        impl From<$glam_type> for $name {
            #[inline]
            fn from(v: $glam_type) -> Self {
                Self {
                    $($field: v.$field),+
                }
            }
        }

        impl From<$name> for $glam_type {
            #[inline]
            fn from(v: $name) -> Self {
                <$glam_type>::new($(v.$field),+)
            }
        }

        // Conversions to and from arrays.
        impl From<$array> for $name {
            #[inline]
            fn from(arr: $array) -> Self {
                Self::from_array(arr)
            }
        }

        impl From<$name> for $array {
            #[inline]
            fn from(v: $name) -> Self {
                v.to_array()
            }
        }

        // Arithmetic operations implemented via glam.
        impl std::ops::Add for $name {
            type Output = Self;

            #[inline]
            fn add(self, rhs: Self) -> Self::Output {
                let a: $glam_type = self.into();
                let b: $glam_type = rhs.into();
                Self::from(a + b)
            }
        }

        impl std::ops::Sub for $name {
            type Output = Self;

            #[inline]
            fn sub(self, rhs: Self) -> Self::Output {
                let a: $glam_type = self.into();
                let b: $glam_type = rhs.into();
                Self::from(a - b)
            }
        }

        impl std::ops::Mul<f64> for $name {
            type Output = Self;

            #[inline]
            fn mul(self, rhs: f64) -> Self::Output {
                let a: $glam_type = self.into();
                Self::from(a * rhs)
            }
        }

        impl std::ops::Mul<$name> for f64 {
            type Output = $name;

            #[inline]
            fn mul(self, rhs: $name) -> Self::Output {
                let b: $glam_type = rhs.into();
                $name::from(self * b)
            }
        }

        impl std::ops::Div<f64> for $name {
            type Output = Self;

            #[inline]
            fn div(self, rhs: f64) -> Self::Output {
                let a: $glam_type = self.into();
                Self::from(a / rhs)
            }
        }

        impl std::ops::Neg for $name {
            type Output = Self;

            #[inline]
            fn neg(self) -> Self::Output {
                let a: $glam_type = self.into();
                Self::from(-a)
            }
        }
    };
}
