//! Macros for writing expected transport streams in unit tests as compact literals.

macro_rules! send {
    ([$($d:tt),*]) => {Sent::Data(vec![$($d,)*])};
    ($c:tt) => {Sent::Cmd($c)};
}
macro_rules! sends {
    ($($e:tt),*) => {&[$(send!($e),)*]};
}
