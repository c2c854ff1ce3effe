//! The invocation capability shared by every wrapper.
//!
//! A wrapper never cares what its target *is*, only that it can be called
//! with some positional arguments. That capability is expressed by two
//! single-method traits:
//!
//! - [`Invoke<Args>`]: a free callable taking the argument tuple `Args`
//! - [`InvokeOn<R, Args>`]: a method-like callable taking a `&mut R` receiver
//!   followed by the argument tuple `Args`
//!
//! Both are implemented for every [`Fn`] of arity 0 to 6, so plain functions
//! and closures can be wrapped directly. Wrappers implement the same traits,
//! which lets them be stacked.
//!
//! # Argument Tuples
//!
//! Arguments travel as one tuple and are spread back into positional
//! parameters on the way into the target. Their order and types are never
//! touched.
//!
//! ```text
//! f.invoke(())           == f()
//! f.invoke((a,))         == f(a)
//! f.invoke((a, b, c))    == f(a, b, c)
//! m.invoke_on(r, (a, b)) == m(r, a, b)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use wrapkit::{Invoke, InvokeOn};
//!
//! fn add(first: i32, second: i32) -> i32 { first + second }
//! assert_eq!(add.invoke((2, 3)), 5);
//!
//! let bump = |counter: &mut i32, step: i32| { *counter += step; *counter };
//! let mut counter = 10;
//! assert_eq!(bump.invoke_on(&mut counter, (5,)), 15);
//! ```

/// A callable taking its positional arguments as the tuple `Args`.
pub trait Invoke<Args> {
    /// The value produced by one invocation.
    type Output;

    /// Calls the target with `args`.
    fn invoke(&self, args: Args) -> Self::Output;
}

/// A method-like callable: a mutable receiver plus the argument tuple `Args`.
pub trait InvokeOn<R: ?Sized, Args> {
    /// The value produced by one invocation.
    type Output;

    /// Calls the target against `receiver` with `args`.
    fn invoke_on(&self, receiver: &mut R, args: Args) -> Self::Output;
}

macro_rules! impl_invoke_for_fn {
    ($($argument:ident: $type:ident),*) => {
        impl<Function, Value, $($type),*> Invoke<($($type,)*)> for Function
        where
            Function: Fn($($type),*) -> Value,
        {
            type Output = Value;

            #[inline]
            #[allow(non_snake_case, clippy::unused_unit)]
            fn invoke(&self, ($($argument,)*): ($($type,)*)) -> Value {
                self($($argument),*)
            }
        }

        impl<Function, Receiver, Value, $($type),*> InvokeOn<Receiver, ($($type,)*)> for Function
        where
            Receiver: ?Sized,
            Function: Fn(&mut Receiver, $($type),*) -> Value,
        {
            type Output = Value;

            #[inline]
            #[allow(non_snake_case, clippy::unused_unit)]
            fn invoke_on(&self, receiver: &mut Receiver, ($($argument,)*): ($($type,)*)) -> Value {
                self(receiver, $($argument),*)
            }
        }
    };
}

impl_invoke_for_fn!();
impl_invoke_for_fn!(first: A);
impl_invoke_for_fn!(first: A, second: B);
impl_invoke_for_fn!(first: A, second: B, third: C);
impl_invoke_for_fn!(first: A, second: B, third: C, fourth: D);
impl_invoke_for_fn!(first: A, second: B, third: C, fourth: D, fifth: E);
impl_invoke_for_fn!(first: A, second: B, third: C, fourth: D, fifth: E, sixth: G);
