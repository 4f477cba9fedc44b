//! Redaction traversal for arrays, growable sequences, and tuples.

use std::collections::VecDeque;

use crate::redaction::{
    redact::{Kind, RedactableMapper},
    traits::RedactableWithMapper,
};

// =============================================================================
// Fixed-size arrays
// =============================================================================

impl<T, const N: usize> RedactableWithMapper for [T; N]
where
    T: RedactableWithMapper,
{
    fn redact_with<M: RedactableMapper>(self, mapper: &M) -> Self {
        mapper.visit(Kind::Array, std::any::type_name::<Self>());
        self.map(|value| value.redact_with(mapper))
    }
}

// =============================================================================
// Growable sequences
// =============================================================================

impl<T> RedactableWithMapper for Vec<T>
where
    T: RedactableWithMapper,
{
    fn redact_with<M: RedactableMapper>(self, mapper: &M) -> Self {
        mapper.visit(Kind::Sequence, std::any::type_name::<Self>());
        let mut result = Vec::with_capacity(self.len());
        result.extend(self.into_iter().map(|value| value.redact_with(mapper)));
        result
    }
}

impl<T> RedactableWithMapper for VecDeque<T>
where
    T: RedactableWithMapper,
{
    fn redact_with<M: RedactableMapper>(self, mapper: &M) -> Self {
        mapper.visit(Kind::Sequence, std::any::type_name::<Self>());
        self.into_iter()
            .map(|value| value.redact_with(mapper))
            .collect()
    }
}

// =============================================================================
// Tuples
// =============================================================================

macro_rules! impl_redactable_tuple {
    ($($name:ident),+) => {
        impl<$($name),+> RedactableWithMapper for ($($name,)+)
        where
            $($name: RedactableWithMapper,)+
        {
            #[allow(non_snake_case)]
            fn redact_with<M: RedactableMapper>(self, mapper: &M) -> Self {
                mapper.visit(Kind::Tuple, std::any::type_name::<Self>());
                let ($($name,)+) = self;
                ($($name.redact_with(mapper),)+)
            }
        }
    };
}

impl_redactable_tuple!(A);
impl_redactable_tuple!(A, B);
impl_redactable_tuple!(A, B, C);
impl_redactable_tuple!(A, B, C, D);
impl_redactable_tuple!(A, B, C, D, E);
impl_redactable_tuple!(A, B, C, D, E, F);
impl_redactable_tuple!(A, B, C, D, E, F, G);
impl_redactable_tuple!(A, B, C, D, E, F, G, H);
