use crate::algo::dijkstra::DijkstraWeight;

macro_rules! impl_integer_dijkstra_weight {
    ($($weight_type:ty),*) => {$(
        impl DijkstraWeight for $weight_type {
            #[inline]
            fn infinity() -> Self {
                Self::MAX
            }

            #[inline]
            fn zero() -> Self {
                0
            }

            #[inline]
            fn saturating_add(self, other: Self) -> Self {
                <$weight_type>::saturating_add(self, other)
            }
        }
    )*};
}

macro_rules! impl_float_dijkstra_weight {
    ($($weight_type:ty),*) => {$(
        impl DijkstraWeight for $weight_type {
            #[inline]
            fn infinity() -> Self {
                Self::INFINITY
            }

            #[inline]
            fn zero() -> Self {
                0.0
            }

            #[inline]
            fn saturating_add(self, other: Self) -> Self {
                self + other
            }
        }
    )*};
}

impl_integer_dijkstra_weight!(usize, u8, u16, u32, u64, u128);
impl_integer_dijkstra_weight!(isize, i8, i16, i32, i64, i128);
impl_float_dijkstra_weight!(f32, f64);
