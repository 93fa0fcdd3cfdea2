use super::Probe;

// =============================================================================
// Identity
// =============================================================================

probe! {
    /// `T` and `U` unify.
    SAME_AS: impl[T: ?Sized] Probe<T, T>;
}

// =============================================================================
// Construction / Destruction
// =============================================================================

probe! {
    /// An owned `T` can be dropped.
    DESTRUCTIBLE: impl[T, U: ?Sized] Probe<T, U>;
}

probe! {
    /// Dropping a `T` runs no code.
    TRIVIALLY_DESTRUCTIBLE: impl[T, U: ?Sized] Probe<T, U>
        => crate::primitives::lifecycle::trivially_destructible::<T>();
}

probe! {
    /// `T` can be built from the argument tuple `Args`.
    CONSTRUCTIBLE_FROM: impl[T, Args] Probe<T, Args>
        where [T: crate::primitives::lifecycle::ConstructibleFrom<Args>];
}

probe! {
    /// `T` can be built from `Args` by a move or a bitwise copy.
    NOTHROW_CONSTRUCTIBLE_FROM: impl[T, Args] Probe<T, Args>
        where [T: crate::primitives::lifecycle::NothrowConstructibleFrom<Args>];
}

probe! {
    /// Value form of default initialization: `T::default()`.
    VALUE_INIT: impl[T: Default, U: ?Sized] Probe<T, U>;
}

probe! {
    /// Heap form of default initialization: `Box::<T>::default()`.
    HEAP_INIT: impl[T: crate::primitives::lifecycle::HeapInit, U: ?Sized] Probe<T, U>;
}

probe! {
    /// `T` can be built from `&T`.
    CLONE: impl[T: Clone, U: ?Sized] Probe<T, U>;
}

probe! {
    /// `T` is duplicated bitwise.
    COPY: impl[T: Copy, U: ?Sized] Probe<T, U>;
}

// =============================================================================
// Assignment
// =============================================================================

probe! {
    /// `L` is a mutable reference: the only shape assignment can target.
    MUT_REFERENCE: impl['a, T: ?Sized, U: ?Sized] Probe<&'a mut T, U>;
}

probe! {
    /// `R` can be assigned through `L`.
    ASSIGNABLE_FROM: impl[L, R] Probe<L, R>
        where [L: crate::concepts::assign::AssignableFrom<R>];
}

// =============================================================================
// Exchange
// =============================================================================

probe! {
    /// `T` registered a bespoke exchange with `U`.
    BESPOKE_SWAP: impl[T: ?Sized, U: ?Sized] Probe<T, U>
        where [T: crate::exchange::SwapWith<U>];
}

probe! {
    /// The bespoke exchange of `T` with `U` cannot panic.
    BESPOKE_SWAP_INFALLIBLE: impl[T: ?Sized, U: ?Sized] Probe<T, U>
        where [T: crate::exchange::SwapWith<U>]
        => <T as crate::exchange::SwapWith<U>>::INFALLIBLE;
}

// =============================================================================
// Comparison
// =============================================================================

probe! {
    /// `==` and `!=` are defined between `&T` and `&U`.
    PARTIAL_EQ: impl[T: ?Sized + PartialEq<U>, U: ?Sized] Probe<T, U>;
}

probe! {
    /// `<`, `>`, `<=`, `>=` are defined between `&T` and `&U`.
    PARTIAL_ORD: impl[T: ?Sized + PartialOrd<U>, U: ?Sized] Probe<T, U>;
}

// =============================================================================
// Decay
// =============================================================================

probe! {
    /// `R` is `&X` or `&mut X`.
    IS_REFERENCE: impl[R: ?Sized + crate::concepts::decay::Referent, U: ?Sized] Probe<R, U>;
}

probe! {
    /// The referent of `R` can be cloned out.
    REFERENT_CLONE: impl[R: ?Sized + crate::concepts::decay::Referent, U: ?Sized] Probe<R, U>
        where [<R as crate::concepts::decay::Referent>::Target: Clone];
}

probe! {
    /// The referent of `R` can be built from `R` without running user code.
    REFERENT_NOTHROW_CONSTRUCTIBLE: impl[R: crate::concepts::decay::Referent, U: ?Sized] Probe<R, U>
        where [
            <R as crate::concepts::decay::Referent>::Target:
                crate::primitives::lifecycle::NothrowConstructibleFrom<(R,)>,
        ];
}

probe! {
    /// The referent of `R` is move-constructible.
    REFERENT_MOVE: impl[R: ?Sized + crate::concepts::decay::Referent, U: ?Sized] Probe<R, U>
        where [<R as crate::concepts::decay::Referent>::Target: crate::concepts::lifecycle::MoveConstructible];
}

probe! {
    /// The referent of `R` is exactly `U`.
    REFERENT_SAME_AS: impl[R: ?Sized + crate::concepts::decay::Referent, U: ?Sized] Probe<R, U>
        where [
            <R as crate::concepts::decay::Referent>::Target: crate::primitives::identity::SameAs<U>,
            U: crate::primitives::identity::SameAs<<R as crate::concepts::decay::Referent>::Target>,
        ];
}

// =============================================================================
// Misc
// =============================================================================

probe! {
    /// `T` is a primitive integer.
    INTEGRAL: impl[T: crate::concepts::misc::Integral, U: ?Sized] Probe<T, U>;
}

probe! {
    /// `T` converts into `U`.
    CONVERTIBLE_TO: impl[T: Into<U>, U] Probe<T, U>;
}
