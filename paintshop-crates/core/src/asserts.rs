//! Leveled assertions. Cheap checks run at [`PAINTSHOP_ASSERT_SIMPLE`], while checks that rescan
//! the clause set at every search node are reserved for tests and the `debug-checks` feature.

#[cfg(all(not(test), not(feature = "debug-checks")))]
pub const PAINTSHOP_ASSERT_LEVEL_DEFINITION: u8 = PAINTSHOP_ASSERT_SIMPLE;

#[cfg(any(test, feature = "debug-checks"))]
pub const PAINTSHOP_ASSERT_LEVEL_DEFINITION: u8 = PAINTSHOP_ASSERT_ADVANCED;

pub const PAINTSHOP_ASSERT_SIMPLE: u8 = 1;
pub const PAINTSHOP_ASSERT_MODERATE: u8 = 2;
pub const PAINTSHOP_ASSERT_ADVANCED: u8 = 3;

#[macro_export]
#[doc(hidden)]
macro_rules! paintshop_assert_simple {
    ($($arg:tt)*) => {
        if $crate::asserts::PAINTSHOP_ASSERT_LEVEL_DEFINITION >= $crate::asserts::PAINTSHOP_ASSERT_SIMPLE {
            assert!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! paintshop_assert_eq_simple {
    ($($arg:tt)*) => {
        if $crate::asserts::PAINTSHOP_ASSERT_LEVEL_DEFINITION >= $crate::asserts::PAINTSHOP_ASSERT_SIMPLE {
            assert_eq!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! paintshop_assert_moderate {
    ($($arg:tt)*) => {
        if $crate::asserts::PAINTSHOP_ASSERT_LEVEL_DEFINITION >= $crate::asserts::PAINTSHOP_ASSERT_MODERATE {
            assert!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! paintshop_assert_advanced {
    ($($arg:tt)*) => {
        if $crate::asserts::PAINTSHOP_ASSERT_LEVEL_DEFINITION >= $crate::asserts::PAINTSHOP_ASSERT_ADVANCED {
            assert!($($arg)*);
        }
    };
}
