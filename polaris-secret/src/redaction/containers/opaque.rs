//! Opaque values: function pointers and channel endpoints.
//!
//! These cannot be copied structurally. They are leaves during traversal and
//! are handed back untouched by [`redact`](crate::redact).

use std::sync::mpsc::{Receiver, Sender, SyncSender};

use crate::redaction::{
    redact::{Kind, RedactableMapper},
    traits::RedactableWithMapper,
};

macro_rules! impl_redactable_opaque {
    ([$($generics:tt)*] $ty:ty) => {
        impl<$($generics)*> RedactableWithMapper for $ty {
            fn redact_with<M: RedactableMapper>(self, mapper: &M) -> Self {
                mapper.visit(Kind::Leaf, std::any::type_name::<Self>());
                self
            }

            fn is_nil_or_opaque(&self) -> bool {
                true
            }
        }
    };
}

impl_redactable_opaque!([T] Sender<T>);
impl_redactable_opaque!([T] SyncSender<T>);
impl_redactable_opaque!([T] Receiver<T>);

impl_redactable_opaque!([R] fn() -> R);
impl_redactable_opaque!([A, R] fn(A) -> R);
impl_redactable_opaque!([A, B, R] fn(A, B) -> R);
impl_redactable_opaque!([A, B, C, R] fn(A, B, C) -> R);
