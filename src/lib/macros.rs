macro_rules! getter {
    (ref $name:ident: $kind:ty) => (
        #[inline(always)]
        pub fn $name(&self) -> &$kind {
            &self.$name
        }
    );
    ($name:ident: $kind:ty) => (
        #[inline(always)]
        pub fn $name(&self) -> $kind {
            self.$name
        }
    );
}

macro_rules! order {
    ($name:ident($($field:tt),+) ascending) => (order! { $name($($field),+) false });
    ($name:ident($($field:tt),+) descending) => (order! { $name($($field),+) true });
    ($name:ident($($field:tt),+) $reverse:tt) => (
        impl ::std::cmp::Eq for $name {
        }

        impl ::std::cmp::Ord for $name {
            fn cmp(&self, other: &Self) -> ::std::cmp::Ordering {
                use ::std::cmp::Ordering::Equal;
                let ordering = Equal$(.then_with(|| {
                    self.$field.partial_cmp(&other.$field).unwrap_or(Equal)
                }))+;
                if $reverse { ordering.reverse() } else { ordering }
            }
        }

        impl ::std::cmp::PartialEq for $name {
            #[inline]
            fn eq(&self, other: &Self) -> bool {
                self.cmp(other) == ::std::cmp::Ordering::Equal
            }
        }

        impl ::std::cmp::PartialOrd for $name {
            #[inline]
            fn partial_cmp(&self, other: &Self) -> Option<::std::cmp::Ordering> {
                Some(self.cmp(other))
            }
        }
    );
}

macro_rules! raise(
    ($message:expr) => (return Err(crate::Error::new($message)));
    ($($arg:tt)*) => (return Err(crate::Error::new(format!($($arg)*))));
);

macro_rules! some(
    ($option:expr) => (match $option {
        Some(value) => value,
        _ => raise!("encountered a logic error"),
    });
    ($option:expr, $($arg:tt)+) => (match $option {
        Some(value) => value,
        _ => raise!($($arg)*),
    });
);
