#[macro_export]
macro_rules! register {
    ( $via:ident: $($ty:ty),* ) => {
        $(
            impl $crate::coercion::Cast for $ty {
                #[inline]
                fn cast(value: &$crate::value::Value) -> Self {
                    $crate::coercion::$via(value) as $ty
                }
            }
        )*
    };
}
