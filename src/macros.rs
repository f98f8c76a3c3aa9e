// Operator plumbing shared by the numeric kinds. Each kind implements its
// arithmetic once as `fn(&T, &T) -> T` and these macros fan it out over the
// owned and borrowed operand combinations.

macro_rules! forward_binop {
    ($t:ty, $imp:ident, $method:ident, $func:ident) => {
        impl std::ops::$imp<&$t> for &$t {
            type Output = $t;
            fn $method(self, rhs: &$t) -> $t {
                $func(self, rhs)
            }
        }
        impl std::ops::$imp<$t> for $t {
            type Output = $t;
            fn $method(self, rhs: $t) -> $t {
                $func(&self, &rhs)
            }
        }
        impl std::ops::$imp<&$t> for $t {
            type Output = $t;
            fn $method(self, rhs: &$t) -> $t {
                $func(&self, rhs)
            }
        }
        impl std::ops::$imp<$t> for &$t {
            type Output = $t;
            fn $method(self, rhs: $t) -> $t {
                $func(self, &rhs)
            }
        }
    };
}

macro_rules! forward_assign {
    ($t:ty, $imp:ident, $method:ident, $func:ident) => {
        impl std::ops::$imp<&$t> for $t {
            fn $method(&mut self, rhs: &$t) {
                *self = $func(self, rhs);
            }
        }
        impl std::ops::$imp<$t> for $t {
            fn $method(&mut self, rhs: $t) {
                *self = $func(self, &rhs);
            }
        }
    };
}
